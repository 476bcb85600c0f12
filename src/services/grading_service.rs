//! Exam grading rules.

use crate::models::training::ExamResult;
use chrono::{Datelike, Duration, NaiveDate};

/// Passing threshold in percent.
pub const PASSING_PERCENT: f64 = 80.0;

/// Derived fields of a training record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamOutcome {
    pub percent: f64,
    pub result: ExamResult,
    pub next_exam_date: Option<NaiveDate>,
}

/// Compute all derived fields from the answer counts and exam date.
pub fn grade(correct_answers: i64, questions_total: i64, exam_date: NaiveDate) -> ExamOutcome {
    let percent = exam_percent(correct_answers, questions_total);
    let result = exam_result(percent);
    ExamOutcome {
        percent,
        result,
        next_exam_date: next_exam_date(exam_date, result),
    }
}

/// 100 × correct / total, rounded to one decimal; 0.0 when total is zero.
pub fn exam_percent(correct_answers: i64, questions_total: i64) -> f64 {
    if questions_total <= 0 {
        return 0.0;
    }
    (correct_answers as f64 / questions_total as f64 * 1000.0).round() / 10.0
}

pub fn exam_result(percent: f64) -> ExamResult {
    if percent >= PASSING_PERCENT {
        ExamResult::Positive
    } else {
        ExamResult::Negative
    }
}

/// One year after the exam date for a positive result.
///
/// Keeps the same month and day; when that date does not exist (Feb 29
/// source), falls back to a flat 365-day offset.
pub fn next_exam_date(exam_date: NaiveDate, result: ExamResult) -> Option<NaiveDate> {
    match result {
        ExamResult::Negative => None,
        ExamResult::Positive => Some(
            exam_date
                .with_year(exam_date.year() + 1)
                .unwrap_or_else(|| exam_date + Duration::days(365)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(exam_percent(8, 10), 80.0);
        assert_eq!(exam_percent(7, 10), 70.0);
        assert_eq!(exam_percent(2, 3), 66.7);
        assert_eq!(exam_percent(1, 3), 33.3);
        assert_eq!(exam_percent(0, 0), 0.0);
        assert_eq!(exam_percent(5, 0), 0.0);
    }

    #[test]
    fn threshold_is_inclusive_at_eighty() {
        assert_eq!(exam_result(80.0), ExamResult::Positive);
        assert_eq!(exam_result(79.9), ExamResult::Negative);
        assert_eq!(exam_result(100.0), ExamResult::Positive);
        assert_eq!(exam_result(0.0), ExamResult::Negative);
    }

    #[test]
    fn passing_grade_schedules_next_exam_one_year_later() {
        let outcome = grade(8, 10, date(2025, 3, 10));
        assert_eq!(outcome.percent, 80.0);
        assert_eq!(outcome.result, ExamResult::Positive);
        assert_eq!(outcome.next_exam_date, Some(date(2026, 3, 10)));
    }

    #[test]
    fn failing_grade_has_no_next_exam() {
        let outcome = grade(7, 10, date(2025, 3, 10));
        assert_eq!(outcome.percent, 70.0);
        assert_eq!(outcome.result, ExamResult::Negative);
        assert_eq!(outcome.next_exam_date, None);
    }

    #[test]
    fn leap_day_falls_back_to_365_days() {
        let next = next_exam_date(date(2024, 2, 29), ExamResult::Positive);
        assert_eq!(next, Some(date(2025, 2, 28)));
    }
}
