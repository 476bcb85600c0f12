use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::{dto::forms::ParticipantForm, error::Result, views, AppState};

pub async fn list_participants(State(state): State<AppState>) -> Result<Html<String>> {
    let participants = state.participant_service.list().await?;
    Ok(Html(views::participants::list_page(&participants)))
}

pub async fn new_participant_form() -> Html<String> {
    Html(views::participants::form_page(None))
}

pub async fn create_participant(
    State(state): State<AppState>,
    Form(form): Form<ParticipantForm>,
) -> Result<Redirect> {
    let payload = form.parse()?;
    state.participant_service.create(payload).await?;
    Ok(Redirect::to("/participants"))
}

pub async fn edit_participant_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let participant = state.participant_service.get(id).await?;
    Ok(Html(views::participants::form_page(Some(&participant))))
}

pub async fn update_participant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ParticipantForm>,
) -> Result<Redirect> {
    let payload = form.parse()?;
    state.participant_service.update(id, payload).await?;
    Ok(Redirect::to("/participants"))
}

pub async fn delete_participant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state.participant_service.delete(id).await?;
    Ok(Redirect::to("/participants"))
}
