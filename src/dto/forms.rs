//! Form payloads for the HTML surface.
//!
//! Browsers submit every field as a string and send empty strings for blank
//! inputs, so each form is deserialized as raw strings and then parsed into a
//! typed payload. Malformed dates or counts are rejected with 400 rather than
//! coerced.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProgramForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub theory_hours: String,
    #[serde(default)]
    pub exam_hours: String,
}

#[derive(Debug, Clone)]
pub struct ProgramPayload {
    pub name: String,
    pub category: Option<String>,
    pub theory_hours: Option<i64>,
    pub exam_hours: Option<i64>,
}

impl ProgramForm {
    pub fn parse(self) -> Result<ProgramPayload> {
        Ok(ProgramPayload {
            name: required_text("name", self.name)?,
            category: non_empty(self.category),
            theory_hours: optional_count("theory_hours", self.theory_hours)?,
            exam_hours: optional_count("exam_hours", self.exam_hours)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ParticipantForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub iin: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub lmk_number: String,
    #[serde(default)]
    pub workplace: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub activity_type: String,
}

#[derive(Debug, Clone)]
pub struct ParticipantPayload {
    pub full_name: String,
    pub iin: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub lmk_number: Option<String>,
    pub workplace: Option<String>,
    pub position: Option<String>,
    pub activity_type: Option<String>,
}

impl ParticipantForm {
    pub fn parse(self) -> Result<ParticipantPayload> {
        Ok(ParticipantPayload {
            full_name: required_text("full_name", self.full_name)?,
            iin: non_empty(self.iin),
            birth_date: optional_date("birth_date", self.birth_date)?,
            sex: non_empty(self.sex),
            lmk_number: non_empty(self.lmk_number),
            workplace: non_empty(self.workplace),
            position: non_empty(self.position),
            activity_type: non_empty(self.activity_type),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TrainingForm {
    #[serde(default)]
    pub participant_id: String,
    #[serde(default)]
    pub program_id: String,
    #[serde(default)]
    pub training_start_date: String,
    #[serde(default)]
    pub training_end_date: String,
    #[serde(default)]
    pub exam_date: String,
    #[serde(default)]
    pub questions_total: String,
    #[serde(default)]
    pub correct_answers: String,
}

#[derive(Debug, Clone)]
pub struct TrainingPayload {
    pub participant_id: i64,
    pub program_id: i64,
    pub training_start_date: Option<NaiveDate>,
    pub training_end_date: Option<NaiveDate>,
    pub exam_date: NaiveDate,
    pub questions_total: i64,
    pub correct_answers: i64,
}

impl TrainingForm {
    pub fn parse(self) -> Result<TrainingPayload> {
        Ok(TrainingPayload {
            participant_id: required_count("participant_id", self.participant_id)?,
            program_id: required_count("program_id", self.program_id)?,
            training_start_date: optional_date("training_start_date", self.training_start_date)?,
            training_end_date: optional_date("training_end_date", self.training_end_date)?,
            exam_date: required_date("exam_date", self.exam_date)?,
            questions_total: required_count("questions_total", self.questions_total)?,
            correct_answers: required_count("correct_answers", self.correct_answers)?,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_text(field: &str, value: String) -> Result<String> {
    non_empty(value).ok_or_else(|| Error::BadRequest(format!("Field '{}' is required", field)))
}

fn parse_count(field: &str, raw: &str) -> Result<i64> {
    let value: i64 = raw
        .parse()
        .map_err(|_| Error::BadRequest(format!("Field '{}' must be a number", field)))?;
    if value < 0 {
        return Err(Error::BadRequest(format!(
            "Field '{}' must not be negative",
            field
        )));
    }
    Ok(value)
}

fn required_count(field: &str, value: String) -> Result<i64> {
    let raw = required_text(field, value)?;
    parse_count(field, &raw)
}

fn optional_count(field: &str, value: String) -> Result<Option<i64>> {
    non_empty(value).map(|raw| parse_count(field, &raw)).transpose()
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::BadRequest(format!("Field '{}' must be a date (YYYY-MM-DD)", field)))
}

fn required_date(field: &str, value: String) -> Result<NaiveDate> {
    let raw = required_text(field, value)?;
    parse_date(field, &raw)
}

fn optional_date(field: &str, value: String) -> Result<Option<NaiveDate>> {
    non_empty(value).map(|raw| parse_date(field, &raw)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_form_treats_blank_fields_as_absent() {
        let form = ProgramForm {
            name: "  Гигиена питания  ".to_string(),
            category: String::new(),
            theory_hours: "6".to_string(),
            exam_hours: String::new(),
        };
        let payload = form.parse().unwrap();
        assert_eq!(payload.name, "Гигиена питания");
        assert_eq!(payload.category, None);
        assert_eq!(payload.theory_hours, Some(6));
        assert_eq!(payload.exam_hours, None);
    }

    #[test]
    fn program_form_requires_name() {
        let form = ProgramForm {
            name: "   ".to_string(),
            category: String::new(),
            theory_hours: String::new(),
            exam_hours: String::new(),
        };
        assert!(matches!(form.parse(), Err(Error::BadRequest(_))));
    }

    #[test]
    fn training_form_rejects_malformed_input() {
        let base = || TrainingForm {
            participant_id: "1".to_string(),
            program_id: "1".to_string(),
            training_start_date: String::new(),
            training_end_date: String::new(),
            exam_date: "2025-03-10".to_string(),
            questions_total: "10".to_string(),
            correct_answers: "8".to_string(),
        };

        assert!(base().parse().is_ok());

        let mut bad_date = base();
        bad_date.exam_date = "10.03.2025".to_string();
        assert!(matches!(bad_date.parse(), Err(Error::BadRequest(_))));

        let mut bad_count = base();
        bad_count.questions_total = "ten".to_string();
        assert!(matches!(bad_count.parse(), Err(Error::BadRequest(_))));

        let mut negative = base();
        negative.correct_answers = "-1".to_string();
        assert!(matches!(negative.parse(), Err(Error::BadRequest(_))));
    }
}
