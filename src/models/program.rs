use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A training curriculum with optional hour allocations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Program {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub theory_hours: Option<i64>,
    pub exam_hours: Option<i64>,
}
