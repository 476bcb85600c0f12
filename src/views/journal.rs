use crate::models::training::JournalEntry;
use crate::services::export_service::ExportService;
use crate::utils::time::{format_period, format_ru_date};
use crate::views::{escape, layout};

pub fn journal_page(entries: &[JournalEntry]) -> String {
    let mut rows = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        rows.push_str(&format!(
            "<tr><td>{number}</td><td>{name}</td><td>{place}</td><td>{period}</td>\
             <td>{exam_date}</td><td>{result}</td><td>{next_exam}</td></tr>",
            number = idx + 1,
            name = escape(&entry.full_name),
            place = escape(&entry.place_summary()),
            period = format_period(entry.training_start_date, entry.training_end_date),
            exam_date = format_ru_date(entry.exam_date),
            result = ExportService::format_result(entry.exam_result, entry.exam_percent),
            next_exam = entry.next_exam_date.map(format_ru_date).unwrap_or_default(),
        ));
    }

    let body = format!(
        "<p><a href=\"/journal/excel\">Скачать в Excel</a></p>\
         <table><tr><th>№</th><th>ФИО слушателя</th>\
         <th>Место работы, должность, вид деятельности/услуг</th><th>Период обучения</th>\
         <th>Дата экзамена</th><th>Результат экзамена</th><th>Дата очередного экзамена</th></tr>\
         {rows}</table>"
    );
    layout("Журнал гигиенического обучения", &body)
}
