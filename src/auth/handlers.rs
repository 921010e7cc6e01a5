use crate::{
    auth::{token::issue_session, SESSION_COOKIE},
    config::Config,
    model::user::User,
    models::{LoginForm, LoginQuery},
    pages,
};
use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    http::header::ContentType,
    web, HttpResponse, Responder,
};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn login_form(query: web::Query<LoginQuery>) -> impl Responder {
    let warning = query
        .error
        .as_deref()
        .map(|_| "Invalid username or password");

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::login(warning))
}

/// Credential check is an exact plaintext match against the users table,
/// matching the system this replaces. Failure redirects back to the form
/// with a warning flag; it is never a hard error.
pub async fn login(
    form: web::Form<LoginForm>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password
        FROM users
        WHERE username = ? AND password = ?
        "#,
    )
    .bind(&form.username)
    .bind(&form.password)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Database error while checking credentials");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let Some(user) = user else {
        info!(username = %form.username, "Login rejected");
        return Ok(pages::redirect("/login?error=1"));
    };

    info!(username = %user.username, "Login successful");

    let token = issue_session(&user.username, &config.session_secret, config.session_ttl);
    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    let mut resp = pages::redirect("/");
    resp.add_cookie(&cookie)
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(resp)
}

/// Drops the session cookie unconditionally; never fails.
pub async fn logout() -> impl Responder {
    let mut removal = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    removal.set_max_age(Duration::ZERO);

    let mut resp = pages::redirect("/login");
    let _ = resp.add_cookie(&removal);
    resp
}
