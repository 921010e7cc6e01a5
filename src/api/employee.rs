use crate::{
    auth::session::SessionUser,
    config::Config,
    model::employee::Employee,
    pages,
    utils::{
        files::{sanitize_filename, store_upload},
        qr,
    },
};
use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{error, info};

/// Add/edit submission. The photo part is optional; a part with an
/// empty original filename counts as "no photo supplied", which is how
/// browsers submit an untouched file input.
#[derive(MultipartForm)]
pub struct EmployeeForm {
    pub name: Text<String>,
    pub username: Text<String>,
    pub email: Text<String>,
    pub password: Text<String>,
    pub city: Text<String>,
    pub photo: Option<TempFile>,
}

fn storage_error(e: sqlx::Error) -> actix_web::Error {
    error!(error = %e, "Employee storage error");
    actix_web::error::ErrorInternalServerError("Internal Server Error")
}

/// Persist the uploaded photo, if one was actually provided, and return
/// its stored filename. Two uploads that sanitize to the same name are
/// not disambiguated; the later one wins.
fn save_photo(form: &EmployeeForm, upload_dir: &Path) -> actix_web::Result<Option<String>> {
    let Some(photo) = form.photo.as_ref() else {
        return Ok(None);
    };
    let Some(original) = photo.file_name.as_deref().filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    let filename = sanitize_filename(original);
    if filename.is_empty() {
        return Ok(None);
    }

    store_upload(photo.file.path(), &upload_dir.join(&filename)).map_err(|e| {
        error!(error = %e, filename, "Failed to store uploaded photo");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(Some(filename))
}

pub async fn index(
    user: SessionUser,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, username, email, password, city, photo
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(storage_error)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::index(&user.username, &employees)))
}

pub async fn add_form(user: SessionUser) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::employee_form(&user.username, "/add", None))
}

/// Insert the row, then generate the QR artifact from the assigned id.
/// The two steps are deliberately not atomic: a QR failure leaves the
/// employee in place and is only logged.
pub async fn add(
    form: MultipartForm<EmployeeForm>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let photo_filename = save_photo(&form, &config.upload_dir)?.unwrap_or_default();

    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, username, email, password, city, photo)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(form.name.as_str())
    .bind(form.username.as_str())
    .bind(form.email.as_str())
    .bind(form.password.as_str())
    .bind(form.city.as_str())
    .bind(&photo_filename)
    .execute(pool.get_ref())
    .await
    .map_err(storage_error)?;

    let employee_id = result.last_insert_rowid();

    if let Err(e) = qr::generate_artifact(&config.qrcode_dir, &form.name, employee_id) {
        error!(error = %e, employee_id, "QR artifact generation failed");
    }

    info!(employee_id, "Employee added");
    Ok(pages::redirect("/"))
}

pub async fn edit_form(
    user: SessionUser,
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, username, email, password, city, photo
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(storage_error)?;

    match employee {
        Some(employee) => Ok(HttpResponse::Ok().content_type(ContentType::html()).body(
            pages::employee_form(
                &user.username,
                &format!("/edit/{employee_id}"),
                Some(&employee),
            ),
        )),
        None => {
            info!(employee_id, "Edit requested for missing employee");
            Ok(pages::redirect("/"))
        }
    }
}

/// The photo column is only touched when a new file was uploaded; the
/// QR artifact is never regenerated, even on rename.
pub async fn edit(
    form: MultipartForm<EmployeeForm>,
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let result = match save_photo(&form, &config.upload_dir)? {
        Some(photo_filename) => {
            sqlx::query(
                r#"
                UPDATE employees
                SET name = ?, username = ?, email = ?, password = ?, city = ?, photo = ?
                WHERE id = ?
                "#,
            )
            .bind(form.name.as_str())
            .bind(form.username.as_str())
            .bind(form.email.as_str())
            .bind(form.password.as_str())
            .bind(form.city.as_str())
            .bind(&photo_filename)
            .bind(employee_id)
            .execute(pool.get_ref())
            .await
        }
        None => {
            sqlx::query(
                r#"
                UPDATE employees
                SET name = ?, username = ?, email = ?, password = ?, city = ?
                WHERE id = ?
                "#,
            )
            .bind(form.name.as_str())
            .bind(form.username.as_str())
            .bind(form.email.as_str())
            .bind(form.password.as_str())
            .bind(form.city.as_str())
            .bind(employee_id)
            .execute(pool.get_ref())
            .await
        }
    }
    .map_err(storage_error)?;

    if result.rows_affected() == 0 {
        info!(employee_id, "Update requested for missing employee");
    } else {
        info!(employee_id, "Employee updated");
    }

    Ok(pages::redirect("/"))
}

/// Removes the row only. The uploaded photo and the QR artifact stay on
/// disk; see DESIGN.md for the open product decision on cleanup.
pub async fn delete(
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(employee_id)
        .execute(pool.get_ref())
        .await
        .map_err(storage_error)?;

    if result.rows_affected() == 0 {
        info!(employee_id, "Delete requested for missing employee");
    } else {
        info!(employee_id, "Employee deleted");
    }

    Ok(pages::redirect("/"))
}
