use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use crate::{dto::forms::ProgramForm, error::Result, views, AppState};

pub async fn list_programs(State(state): State<AppState>) -> Result<Html<String>> {
    let programs = state.program_service.list().await?;
    Ok(Html(views::programs::list_page(&programs)))
}

pub async fn new_program_form() -> Html<String> {
    Html(views::programs::form_page(None))
}

pub async fn create_program(
    State(state): State<AppState>,
    Form(form): Form<ProgramForm>,
) -> Result<Redirect> {
    let payload = form.parse()?;
    state.program_service.create(payload).await?;
    Ok(Redirect::to("/programs"))
}

pub async fn edit_program_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let program = state.program_service.get(id).await?;
    Ok(Html(views::programs::form_page(Some(&program))))
}

pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProgramForm>,
) -> Result<Redirect> {
    let payload = form.parse()?;
    state.program_service.update(id, payload).await?;
    Ok(Redirect::to("/programs"))
}

pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state.program_service.delete(id).await?;
    Ok(Redirect::to("/programs"))
}
