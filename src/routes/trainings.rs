use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::{dto::forms::TrainingForm, error::Result, views, AppState};

pub async fn list_trainings(State(state): State<AppState>) -> Result<Html<String>> {
    let trainings = state.training_service.list().await?;
    Ok(Html(views::trainings::list_page(&trainings)))
}

pub async fn new_training_form(State(state): State<AppState>) -> Result<Html<String>> {
    let participants = state.participant_service.list().await?;
    let programs = state.program_service.list().await?;
    Ok(Html(views::trainings::form_page(
        None,
        &participants,
        &programs,
    )))
}

pub async fn create_training(
    State(state): State<AppState>,
    Form(form): Form<TrainingForm>,
) -> Result<Redirect> {
    let payload = form.parse()?;
    state.training_service.create(payload).await?;
    Ok(Redirect::to("/trainings"))
}

pub async fn edit_training_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let training = state.training_service.get(id).await?;
    let participants = state.participant_service.list().await?;
    let programs = state.program_service.list().await?;
    Ok(Html(views::trainings::form_page(
        Some(&training),
        &participants,
        &programs,
    )))
}

pub async fn update_training(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TrainingForm>,
) -> Result<Redirect> {
    let payload = form.parse()?;
    state.training_service.update(id, payload).await?;
    Ok(Redirect::to("/trainings"))
}

pub async fn delete_training(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state.training_service.delete(id).await?;
    Ok(Redirect::to("/trainings"))
}
