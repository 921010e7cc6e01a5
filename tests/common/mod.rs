#![allow(dead_code)]

use actix_web::cookie::Cookie;
use rollcall::{auth::token::issue_session, config::Config, db};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const SECRET: &str = "test-secret";

/// Fresh schema on a single-connection in-memory database; one
/// connection so every query sees the same store.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::init_schema(&pool).await.unwrap();
    pool
}

pub fn test_config(dir: &TempDir) -> Config {
    let upload_dir = dir.path().join("uploads");
    let qrcode_dir = dir.path().join("qrcodes");
    std::fs::create_dir_all(&upload_dir).unwrap();
    std::fs::create_dir_all(&qrcode_dir).unwrap();

    Config {
        server_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        session_secret: SECRET.to_string(),
        session_ttl: 3600,
        upload_dir,
        qrcode_dir,
        bootstrap_user: None,
        bootstrap_password: None,
    }
}

pub fn session_cookie() -> Cookie<'static> {
    Cookie::new("session", issue_session("admin", SECRET, 3600))
}

pub async fn insert_login(pool: &SqlitePool, username: &str, password: &str) {
    sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(password)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_employee(pool: &SqlitePool, name: &str, photo: &str) -> i64 {
    sqlx::query(
        r#"
        INSERT INTO employees (name, username, email, password, city, photo)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(name.to_lowercase().replace(' ', "."))
    .bind(format!("{}@example.com", name.to_lowercase().replace(' ', ".")))
    .bind("pw")
    .bind("Springfield")
    .bind(photo)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

/// Minimal multipart encoder for the add/edit forms.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let boundary = "rollcall-test-boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}

/// Builds the service under test with the same route table as `main`.
#[macro_export]
macro_rules! init_app {
    ($pool:expr, $config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new($config.clone()))
                .configure(rollcall::routes::configure),
        )
        .await
    };
}
