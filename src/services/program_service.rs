use crate::dto::forms::ProgramPayload;
use crate::error::{Error, Result};
use crate::models::program::Program;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ProgramService {
    pool: SqlitePool,
}

impl ProgramService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Program>> {
        let programs = sqlx::query_as::<_, Program>("SELECT * FROM programs ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(programs)
    }

    pub async fn get(&self, id: i64) -> Result<Program> {
        sqlx::query_as::<_, Program>("SELECT * FROM programs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Program not found".to_string()))
    }

    pub async fn create(&self, payload: ProgramPayload) -> Result<Program> {
        let program = sqlx::query_as::<_, Program>(
            r#"
            INSERT INTO programs (name, category, theory_hours, exam_hours)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.category)
        .bind(payload.theory_hours)
        .bind(payload.exam_hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(program)
    }

    pub async fn update(&self, id: i64, payload: ProgramPayload) -> Result<Program> {
        sqlx::query_as::<_, Program>(
            r#"
            UPDATE programs
            SET name = ?, category = ?, theory_hours = ?, exam_hours = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.category)
        .bind(payload.theory_hours)
        .bind(payload.exam_hours)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Program not found".to_string()))
    }

    /// Deleting a program cascades to its trainings.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM programs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Program not found".to_string()));
        }
        Ok(())
    }
}
