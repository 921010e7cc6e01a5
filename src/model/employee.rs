use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub city: String,
    /// Stored photo filename; empty string when no photo was uploaded.
    pub photo: String,
}
