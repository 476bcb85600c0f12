use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use hygiene_records::dto::forms::{ParticipantPayload, ProgramPayload, TrainingPayload};
use hygiene_records::{routes, AppState};
use std::sync::atomic::{AtomicU32, Ordering};
use tower::ServiceExt;

static DB_SEQ: AtomicU32 = AtomicU32::new(0);

async fn setup() -> (Router, AppState) {
    let _ = hygiene_records::config::init_config();

    let path = std::env::temp_dir().join(format!(
        "hygiene_journal_test_{}_{}.db",
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

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One participant, one program, trainings with the given exam dates, created
/// in the order passed in.
async fn seed_trainings(state: &AppState, exam_dates: &[NaiveDate]) {
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
            workplace: Some("Cafe Central".to_string()),
            position: Some("Cook".to_string()),
            activity_type: Some("Catering".to_string()),
        })
        .await
        .unwrap();

    for exam_date in exam_dates {
        state
            .training_service
            .create(TrainingPayload {
                participant_id: participant.id,
                program_id: program.id,
                training_start_date: None,
                training_end_date: None,
                exam_date: *exam_date,
                questions_total: 10,
                correct_answers: 9,
            })
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn journal_is_ordered_by_exam_date_then_id() {
    let (_app, state) = setup().await;

    // Created out of chronological order, with a duplicate date to exercise
    // the id tiebreak.
    seed_trainings(
        &state,
        &[
            date(2025, 5, 20),
            date(2025, 1, 15),
            date(2025, 5, 20),
            date(2025, 3, 1),
        ],
    )
    .await;

    let entries = state.training_service.journal().await.unwrap();
    assert_eq!(entries.len(), 4);

    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.exam_date).collect();
    assert_eq!(
        dates,
        vec![
            date(2025, 1, 15),
            date(2025, 3, 1),
            date(2025, 5, 20),
            date(2025, 5, 20),
        ]
    );

    // The two same-date rows keep insertion (id) order.
    assert!(entries[2].id < entries[3].id);

    assert_eq!(entries[0].place_summary(), "Cafe Central, Cook, Catering");
}

#[tokio::test]
async fn journal_page_lists_all_trainings() {
    let (app, state) = setup().await;
    seed_trainings(&state, &[date(2025, 1, 15), date(2025, 2, 15)]).await;

    let response = app
        .oneshot(Request::builder().uri("/journal").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(html.matches("Ivanov Ivan").count(), 2);
    assert!(html.contains("15.01.2025"));
    assert!(html.contains("15.02.2025"));
}

#[tokio::test]
async fn journal_excel_download_has_spreadsheet_headers() {
    let (app, state) = setup().await;
    seed_trainings(&state, &[date(2025, 1, 15)]).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/journal/excel")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"journal.xlsx\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}
