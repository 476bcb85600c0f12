use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Exam outcome. Stored in the database as the Russian label so the raw
/// table matches what the certificate and journal print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ExamResult {
    #[sqlx(rename = "Положительный")]
    Positive,
    #[sqlx(rename = "Отрицательный")]
    Negative,
}

impl ExamResult {
    pub fn label(self) -> &'static str {
        match self {
            ExamResult::Positive => "Положительный",
            ExamResult::Negative => "Отрицательный",
        }
    }
}

impl fmt::Display for ExamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One exam event linking a participant to a program.
///
/// `exam_percent`, `exam_result` and `next_exam_date` are derived from the
/// answer counts and exam date on every create/update; they are never edited
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub id: i64,
    pub participant_id: i64,
    pub program_id: i64,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub exam_date: NaiveDate,
    pub questions_total: i64,
    pub correct_answers: i64,
    pub exam_percent: f64,
    pub exam_result: ExamResult,
    pub next_exam_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Training row joined with the participant and program names, for the
/// trainings list page.
#[derive(Debug, Clone, FromRow)]
pub struct TrainingListItem {
    pub id: i64,
    pub participant_name: String,
    pub program_name: String,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub exam_date: NaiveDate,
    pub exam_percent: f64,
    pub exam_result: ExamResult,
    pub next_exam_date: Option<NaiveDate>,
}

/// Training row joined with the participant fields needed by the journal
/// view and the spreadsheet export.
#[derive(Debug, Clone, FromRow)]
pub struct JournalEntry {
    pub id: i64,
    pub full_name: String,
    pub workplace: Option<String>,
    pub position: Option<String>,
    pub activity_type: Option<String>,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub exam_date: NaiveDate,
    pub exam_percent: f64,
    pub exam_result: ExamResult,
    pub next_exam_date: Option<NaiveDate>,
}

impl JournalEntry {
    pub fn place_summary(&self) -> String {
        crate::models::participant::join_place(
            self.workplace.as_deref(),
            self.position.as_deref(),
            self.activity_type.as_deref(),
        )
    }
}

/// Training row joined with the participant name, for the certificate page.
#[derive(Debug, Clone, FromRow)]
pub struct CertificateData {
    pub id: i64,
    pub full_name: String,
    pub program_name: String,
    pub exam_date: NaiveDate,
    pub exam_percent: f64,
    pub exam_result: ExamResult,
    pub next_exam_date: Option<NaiveDate>,
}
