use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};

use crate::{
    error::Result, services::export_service::ExportService, views, AppState,
};

pub async fn journal(State(state): State<AppState>) -> Result<Html<String>> {
    let entries = state.training_service.journal().await?;
    Ok(Html(views::journal::journal_page(&entries)))
}

/// Download the journal as an xlsx workbook.
pub async fn journal_excel(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.training_service.journal().await?;
    let buffer = ExportService::generate_journal_xlsx(&entries)?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"journal.xlsx\"".to_string(),
            ),
        ],
        buffer,
    ))
}
