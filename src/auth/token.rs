use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::SessionClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

/// Issue a signed session token for a freshly authenticated user.
pub fn issue_session(username: &str, secret: &str, ttl: usize) -> String {
    let claims = SessionClaims {
        sub: username.to_string(),
        exp: now() + ttl,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn verify_session(token: &str, secret: &str) -> Result<SessionClaims, String> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
