use crate::dto::forms::TrainingPayload;
use crate::error::{Error, Result};
use crate::models::training::{CertificateData, JournalEntry, Training, TrainingListItem};
use crate::services::grading_service;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct TrainingService {
    pool: SqlitePool,
}

impl TrainingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Trainings with participant/program names, newest exams first.
    pub async fn list(&self) -> Result<Vec<TrainingListItem>> {
        let items = sqlx::query_as::<_, TrainingListItem>(
            r#"
            SELECT t.id,
                   p.full_name AS participant_name,
                   pr.name AS program_name,
                   t.training_start_date, t.training_end_date, t.exam_date,
                   t.exam_percent, t.exam_result, t.next_exam_date
            FROM trainings t
            JOIN participants p ON p.id = t.participant_id
            JOIN programs pr ON pr.id = t.program_id
            ORDER BY t.exam_date DESC, t.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> Result<Training> {
        sqlx::query_as::<_, Training>("SELECT * FROM trainings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Training not found".to_string()))
    }

    pub async fn create(&self, payload: TrainingPayload) -> Result<Training> {
        let outcome = grading_service::grade(
            payload.correct_answers,
            payload.questions_total,
            payload.exam_date,
        );

        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (
                participant_id, program_id,
                training_start_date, training_end_date, exam_date,
                questions_total, correct_answers,
                exam_percent, exam_result, next_exam_date
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(payload.participant_id)
        .bind(payload.program_id)
        .bind(payload.training_start_date)
        .bind(payload.training_end_date)
        .bind(payload.exam_date)
        .bind(payload.questions_total)
        .bind(payload.correct_answers)
        .bind(outcome.percent)
        .bind(outcome.result)
        .bind(outcome.next_exam_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(training)
    }

    /// Full overwrite of the record, recomputing the derived fields.
    pub async fn update(&self, id: i64, payload: TrainingPayload) -> Result<Training> {
        let outcome = grading_service::grade(
            payload.correct_answers,
            payload.questions_total,
            payload.exam_date,
        );

        sqlx::query_as::<_, Training>(
            r#"
            UPDATE trainings
            SET participant_id = ?, program_id = ?,
                training_start_date = ?, training_end_date = ?, exam_date = ?,
                questions_total = ?, correct_answers = ?,
                exam_percent = ?, exam_result = ?, next_exam_date = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(payload.participant_id)
        .bind(payload.program_id)
        .bind(payload.training_start_date)
        .bind(payload.training_end_date)
        .bind(payload.exam_date)
        .bind(payload.questions_total)
        .bind(payload.correct_answers)
        .bind(outcome.percent)
        .bind(outcome.result)
        .bind(outcome.next_exam_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_reference_error)?
        .ok_or_else(|| Error::NotFound("Training not found".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM trainings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Training not found".to_string()));
        }
        Ok(())
    }

    /// Journal rows in chronological order: exam date ascending, ties broken
    /// by id ascending.
    pub async fn journal(&self) -> Result<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT t.id,
                   p.full_name, p.workplace, p.position, p.activity_type,
                   t.training_start_date, t.training_end_date, t.exam_date,
                   t.exam_percent, t.exam_result, t.next_exam_date
            FROM trainings t
            JOIN participants p ON p.id = t.participant_id
            ORDER BY t.exam_date ASC, t.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn certificate_data(&self, id: i64) -> Result<CertificateData> {
        sqlx::query_as::<_, CertificateData>(
            r#"
            SELECT t.id,
                   p.full_name,
                   pr.name AS program_name,
                   t.exam_date, t.exam_percent, t.exam_result, t.next_exam_date
            FROM trainings t
            JOIN participants p ON p.id = t.participant_id
            JOIN programs pr ON pr.id = t.program_id
            WHERE t.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Training not found".to_string()))
    }
}

/// FK violations mean the form referenced a participant or program that no
/// longer exists; surface that as a client error instead of a 500.
fn map_reference_error(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            Error::BadRequest("Unknown participant or program".to_string())
        }
        _ => Error::from(err),
    }
}
