pub mod certificate;
pub mod journal;
pub mod participants;
pub mod programs;
pub mod trainings;

use crate::AppState;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/trainings") }))
        .route("/programs", get(programs::list_programs))
        .route(
            "/programs/new",
            get(programs::new_program_form).post(programs::create_program),
        )
        .route(
            "/programs/edit/:id",
            get(programs::edit_program_form).post(programs::update_program),
        )
        .route("/programs/delete/:id", post(programs::delete_program))
        .route("/participants", get(participants::list_participants))
        .route(
            "/participants/new",
            get(participants::new_participant_form).post(participants::create_participant),
        )
        .route(
            "/participants/edit/:id",
            get(participants::edit_participant_form).post(participants::update_participant),
        )
        .route(
            "/participants/delete/:id",
            post(participants::delete_participant),
        )
        .route("/trainings", get(trainings::list_trainings))
        .route(
            "/trainings/new",
            get(trainings::new_training_form).post(trainings::create_training),
        )
        .route(
            "/trainings/edit/:id",
            get(trainings::edit_training_form).post(trainings::update_training),
        )
        .route("/trainings/delete/:id", post(trainings::delete_training))
        .route("/journal", get(journal::journal))
        .route("/journal/excel", get(journal::journal_excel))
        .route("/certificate/:id", get(certificate::certificate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
