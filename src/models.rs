use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

/// Claims carried by the session cookie token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Deserialize)]
pub struct ScanRequest {
    pub employee_id: i64,
}

#[derive(Serialize, Deserialize)]
pub struct ScanResponse {
    pub status: String,
    pub message: String,
}

impl ScanResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: "info".to_string(),
            message: message.into(),
        }
    }
}
