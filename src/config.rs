use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub session_secret: String,
    /// Session cookie lifetime in seconds.
    pub session_ttl: usize,
    pub upload_dir: PathBuf,
    pub qrcode_dir: PathBuf,

    /// Seed credential inserted at startup when the users table is empty.
    pub bootstrap_user: Option<String>,
    pub bootstrap_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://rollcall.db?mode=rwc".to_string()),
            session_secret: env::var("SESSION_SECRET").expect("SESSION_SECRET must be set"),
            session_ttl: env::var("SESSION_TTL")
                .unwrap_or_else(|_| "28800".to_string()) // default 8 hours
                .parse()
                .unwrap(),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            qrcode_dir: env::var("QRCODE_DIR")
                .unwrap_or_else(|_| "qrcodes".to_string())
                .into(),
            bootstrap_user: env::var("BOOTSTRAP_USER").ok(),
            bootstrap_password: env::var("BOOTSTRAP_PASSWORD").ok(),
        }
    }
}
