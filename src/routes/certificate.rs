use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{
    config::get_config, error::Result, services::certificate_service::CertificateService, views,
    AppState,
};

pub async fn certificate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let data = state.training_service.certificate_data(id).await?;
    let config = get_config();

    let control_hash = CertificateService::control_hash(
        data.id,
        &data.full_name,
        data.exam_date,
        data.exam_result,
        &config.secret_key,
    );

    let qr_payload = CertificateService::qr_payload(
        &config.org_name,
        data.id,
        &data.full_name,
        data.exam_date,
        data.exam_result,
        data.exam_percent,
        &control_hash,
    );
    let qr_image = CertificateService::qr_png_base64(&qr_payload)?;

    Ok(Html(views::certificate::certificate_page(
        &config.org_name,
        &data,
        &qr_image,
        &control_hash,
    )))
}
