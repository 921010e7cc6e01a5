use sqlx::FromRow;

/// Login credential. Stored and compared as plaintext, matching the
/// system this replaces; see DESIGN.md before hardening.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}
