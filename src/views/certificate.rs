use crate::models::training::CertificateData;
use crate::services::export_service::ExportService;
use crate::utils::time::format_ru_date;
use crate::views::{escape, layout};

pub fn certificate_page(
    org_name: &str,
    data: &CertificateData,
    qr_base64: &str,
    control_hash: &str,
) -> String {
    let body = format!(
        r#"<div class="certificate">
<p>{org}</p>
<h2>Свидетельство № {id}</h2>
<p>ФИО: <b>{name}</b></p>
<p>Программа: {program}</p>
<p>Дата экзамена: {exam_date}</p>
<p>Результат: {result}</p>
<p>Дата очередного экзамена: {next_exam}</p>
<img src="data:image/png;base64,{qr}" alt="QR">
<p>Контрольный код: <code>{hash}</code></p>
<p><a href="/trainings">← к списку обучений</a></p>
</div>"#,
        org = escape(org_name),
        id = data.id,
        name = escape(&data.full_name),
        program = escape(&data.program_name),
        exam_date = format_ru_date(data.exam_date),
        result = ExportService::format_result(data.exam_result, data.exam_percent),
        next_exam = data.next_exam_date.map(format_ru_date).unwrap_or_default(),
        qr = qr_base64,
        hash = control_hash,
    );
    layout("Свидетельство", &body)
}
