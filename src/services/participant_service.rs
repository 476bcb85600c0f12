use crate::dto::forms::ParticipantPayload;
use crate::error::{Error, Result};
use crate::models::participant::Participant;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ParticipantService {
    pool: SqlitePool,
}

impl ParticipantService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants =
            sqlx::query_as::<_, Participant>("SELECT * FROM participants ORDER BY full_name")
                .fetch_all(&self.pool)
                .await?;
        Ok(participants)
    }

    pub async fn get(&self, id: i64) -> Result<Participant> {
        sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Participant not found".to_string()))
    }

    pub async fn create(&self, payload: ParticipantPayload) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (
                iin, full_name, birth_date, sex,
                lmk_number, workplace, position, activity_type
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.iin)
        .bind(&payload.full_name)
        .bind(payload.birth_date)
        .bind(&payload.sex)
        .bind(&payload.lmk_number)
        .bind(&payload.workplace)
        .bind(&payload.position)
        .bind(&payload.activity_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    pub async fn update(&self, id: i64, payload: ParticipantPayload) -> Result<Participant> {
        sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET iin = ?, full_name = ?, birth_date = ?, sex = ?,
                lmk_number = ?, workplace = ?, position = ?, activity_type = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&payload.iin)
        .bind(&payload.full_name)
        .bind(payload.birth_date)
        .bind(&payload.sex)
        .bind(&payload.lmk_number)
        .bind(&payload.workplace)
        .bind(&payload.position)
        .bind(&payload.activity_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Participant not found".to_string()))
    }

    /// Deleting a participant cascades to their trainings.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Participant not found".to_string()));
        }
        Ok(())
    }
}
