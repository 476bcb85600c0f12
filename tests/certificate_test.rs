use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use hygiene_records::dto::forms::{ParticipantPayload, ProgramPayload, TrainingPayload};
use hygiene_records::services::certificate_service::CertificateService;
use hygiene_records::{routes, AppState};
use std::sync::atomic::{AtomicU32, Ordering};
use tower::ServiceExt;

static DB_SEQ: AtomicU32 = AtomicU32::new(0);

async fn setup() -> (Router, AppState) {
    let _ = hygiene_records::config::init_config();

    let path = std::env::temp_dir().join(format!(
        "hygiene_certificate_test_{}_{}.db",
        std::process::id(),
        DB_SEQ.fetch_add(1, Ordering::SeqCst),
    ));
    let _ = std::fs::remove_file(&path);

    let pool = hygiene_records::database::pool::connect(&path)
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let state = AppState::new(pool);
    (routes::build_router(state.clone()), state)
}

async fn seed_training(state: &AppState) -> i64 {
    let program = state
        .program_service
        .create(ProgramPayload {
            name: "Food hygiene".to_string(),
            category: None,
            theory_hours: None,
            exam_hours: None,
        })
        .await
        .unwrap();
    let participant = state
        .participant_service
        .create(ParticipantPayload {
            full_name: "Ivanov Ivan".to_string(),
            iin: None,
            birth_date: None,
            sex: None,
            lmk_number: None,
            workplace: None,
            position: None,
            activity_type: None,
        })
        .await
        .unwrap();

    state
        .training_service
        .create(TrainingPayload {
            participant_id: participant.id,
            program_id: program.id,
            training_start_date: None,
            training_end_date: None,
            exam_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            questions_total: 10,
            correct_answers: 8,
        })
        .await
        .unwrap()
        .id
}

async fn fetch_certificate(app: &Router, id: i64) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/certificate/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn certificate_page_embeds_qr_and_control_code() {
    let (app, state) = setup().await;
    let id = seed_training(&state).await;

    let training = state.training_service.certificate_data(id).await.unwrap();
    let config = hygiene_records::config::get_config();
    let expected_hash = CertificateService::control_hash(
        training.id,
        &training.full_name,
        training.exam_date,
        training.exam_result,
        &config.secret_key,
    );

    let html = fetch_certificate(&app, id).await;
    assert!(html.contains(&format!("Свидетельство № {}", id)));
    assert!(html.contains("Ivanov Ivan"));
    assert!(html.contains("10.03.2025"));
    assert!(html.contains("Положительный (80.0 %)"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains(&expected_hash));
}

#[tokio::test]
async fn certificate_is_stable_across_requests() {
    let (app, state) = setup().await;
    let id = seed_training(&state).await;

    let first = fetch_certificate(&app, id).await;
    let second = fetch_certificate(&app, id).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn certificate_for_missing_training_is_404() {
    let (app, _state) = setup().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/certificate/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
