use crate::error::Result;
use crate::models::training::{ExamResult, JournalEntry};
use crate::utils::time::{format_period, format_ru_date};
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 7] = [
    "№",
    "ФИО слушателя",
    "Место работы, должность, вид деятельности/услуг",
    "Период обучения",
    "Дата экзамена",
    "Результат экзамена",
    "Дата очередного экзамена",
];

/// Extra width added on top of the widest cell of each column.
const WIDTH_PADDING: f64 = 2.0;

pub struct ExportService;

impl ExportService {
    /// "Положительный (80.0 %)" style result cell.
    pub fn format_result(result: ExamResult, percent: f64) -> String {
        format!("{} ({:.1} %)", result.label(), percent)
    }

    /// Generate the journal workbook: sheet "Журнал", one header row, one row
    /// per training record in the order the entries were passed in.
    pub fn generate_journal_xlsx(entries: &[JournalEntry]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Журнал")?;

        let header_format = Format::new().set_bold();

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (idx, entry) in entries.iter().enumerate() {
            let row = idx as u32 + 1;
            let number = idx + 1;

            let cells = [
                number.to_string(),
                entry.full_name.clone(),
                entry.place_summary(),
                format_period(entry.training_start_date, entry.training_end_date),
                format_ru_date(entry.exam_date),
                Self::format_result(entry.exam_result, entry.exam_percent),
                entry.next_exam_date.map(format_ru_date).unwrap_or_default(),
            ];

            worksheet.write_number(row, 0, number as f64)?;
            for (col, value) in cells.iter().enumerate().skip(1) {
                worksheet.write_string(row, col as u16, value)?;
            }

            for (col, value) in cells.iter().enumerate() {
                widths[col] = widths[col].max(value.chars().count());
            }
        }

        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width as f64 + WIDTH_PADDING)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: i64) -> JournalEntry {
        JournalEntry {
            id,
            full_name: "Иванов Иван".to_string(),
            workplace: Some("Кафе".to_string()),
            position: Some("Повар".to_string()),
            activity_type: None,
            training_start_date: Some(date(2025, 1, 10)),
            training_end_date: Some(date(2025, 1, 14)),
            exam_date: date(2025, 1, 15),
            exam_percent: 80.0,
            exam_result: ExamResult::Positive,
            next_exam_date: Some(date(2026, 1, 15)),
        }
    }

    #[test]
    fn result_cell_has_one_decimal_and_percent_sign() {
        assert_eq!(
            ExportService::format_result(ExamResult::Positive, 80.0),
            "Положительный (80.0 %)"
        );
        assert_eq!(
            ExportService::format_result(ExamResult::Negative, 66.7),
            "Отрицательный (66.7 %)"
        );
    }

    #[test]
    fn workbook_is_generated_for_empty_and_populated_journals() {
        let empty = ExportService::generate_journal_xlsx(&[]).unwrap();
        // xlsx is a zip container
        assert_eq!(&empty[..2], b"PK");

        let populated =
            ExportService::generate_journal_xlsx(&[entry(1), entry(2), entry(3)]).unwrap();
        assert_eq!(&populated[..2], b"PK");
        assert!(populated.len() > empty.len());
    }
}
