use crate::{
    auth::session::SessionUser,
    model::attendance::Attendance,
    models::{ScanRequest, ScanResponse},
    pages,
};
use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;
use tracing::{error, info};

fn storage_error(e: sqlx::Error) -> actix_web::Error {
    error!(error = %e, "Attendance storage error");
    actix_web::error::ErrorInternalServerError("Internal Server Error")
}

/// Local wall-clock stamp at second precision, as shown to the scanner.
fn wall_clock() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

pub async fn scan_page(user: SessionUser) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::scan(&user.username))
}

/// One scan drives the per-day state machine:
/// no record -> sign-in, signed in -> sign-out, signed out -> no-op.
///
/// The whole transition runs in one transaction and the insert relies on
/// the UNIQUE (employee_id, date) constraint, so two racing scans cannot
/// produce two rows for the same day. The employee id is not validated
/// against the roster; an unknown id records an orphan row.
pub async fn mark_attendance(
    body: web::Json<ScanRequest>,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let employee_id = body.employee_id;
    let today = Local::now().date_naive();

    let mut tx = pool.begin().await.map_err(storage_error)?;

    let existing = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, sign_in, sign_out
        FROM attendance
        WHERE employee_id = ? AND date = ?
        "#,
    )
    .bind(employee_id)
    .bind(today)
    .fetch_optional(&mut *tx)
    .await
    .map_err(storage_error)?;

    let response = match existing {
        None => {
            let stamp = wall_clock();
            let inserted = sqlx::query(
                r#"
                INSERT INTO attendance (employee_id, date, sign_in)
                VALUES (?, ?, ?)
                ON CONFLICT (employee_id, date) DO NOTHING
                "#,
            )
            .bind(employee_id)
            .bind(today)
            .bind(&stamp)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

            if inserted.rows_affected() == 0 {
                // Lost a race with a concurrent scan for the same badge.
                ScanResponse::info("Attendance already recorded today.")
            } else {
                info!(employee_id, %stamp, "Sign in recorded");
                ScanResponse::success(format!("Sign In recorded at {stamp}"))
            }
        }
        Some(record) if record.sign_out.is_none() => {
            let stamp = wall_clock();
            sqlx::query("UPDATE attendance SET sign_out = ? WHERE id = ?")
                .bind(&stamp)
                .bind(record.id)
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;

            info!(employee_id, %stamp, "Sign out recorded");
            ScanResponse::success(format!("Sign Out recorded at {stamp}"))
        }
        Some(_) => ScanResponse::info("Already signed out today."),
    };

    tx.commit().await.map_err(storage_error)?;

    Ok(HttpResponse::Ok().json(response))
}

/// One attendance row joined with the employee name for the dashboard.
#[derive(Debug, sqlx::FromRow)]
pub struct DayRecord {
    pub name: String,
    pub date: NaiveDate,
    pub sign_in: Option<String>,
    pub sign_out: Option<String>,
}

pub async fn dashboard(
    user: SessionUser,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let today = Local::now().date_naive();

    let present: i64 =
        sqlx::query_scalar("SELECT COUNT(DISTINCT employee_id) FROM attendance WHERE date = ?")
            .bind(today)
            .fetch_one(pool.get_ref())
            .await
            .map_err(storage_error)?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool.get_ref())
        .await
        .map_err(storage_error)?;

    // Clamped so stale rows for deleted employees cannot push it negative.
    let absent = (total - present).max(0);

    let records = sqlx::query_as::<_, DayRecord>(
        r#"
        SELECT e.name, a.date, a.sign_in, a.sign_out
        FROM attendance a
        JOIN employees e ON a.employee_id = e.id
        WHERE a.date = ?
        ORDER BY a.date DESC
        "#,
    )
    .bind(today)
    .fetch_all(pool.get_ref())
    .await
    .map_err(storage_error)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::dashboard(
            &user.username,
            present,
            absent,
            total,
            &records,
        )))
}
