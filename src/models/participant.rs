use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An individual who undergoes training and exams.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: i64,
    /// National identification number.
    pub iin: Option<String>,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    /// Medical card number.
    pub lmk_number: Option<String>,
    pub workplace: Option<String>,
    pub position: Option<String>,
    pub activity_type: Option<String>,
}

impl Participant {
    /// "workplace, position, activity type", skipping empty segments.
    pub fn place_summary(&self) -> String {
        join_place(
            self.workplace.as_deref(),
            self.position.as_deref(),
            self.activity_type.as_deref(),
        )
    }
}

pub fn join_place(
    workplace: Option<&str>,
    position: Option<&str>,
    activity_type: Option<&str>,
) -> String {
    [workplace, position, activity_type]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_summary_skips_empty_segments() {
        assert_eq!(
            join_place(Some("Кафе"), None, Some("Общепит")),
            "Кафе, Общепит"
        );
        assert_eq!(join_place(None, None, None), "");
        assert_eq!(join_place(Some(""), Some("Повар"), Some("")), "Повар");
    }
}
