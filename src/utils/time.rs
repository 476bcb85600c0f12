use chrono::NaiveDate;

/// Day.month.year, the format used on pages, certificates and in the journal.
pub fn format_ru_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// ISO format, used to prefill `<input type="date">` fields.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "start – end" in day.month.year, or empty if either bound is missing.
pub fn format_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("{} – {}", format_ru_date(start), format_ru_date(end))
        }
        _ => String::new(),
    }
}
