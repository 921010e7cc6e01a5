use crate::auth::session::SessionUser;
use crate::auth::token::verify_session;
use crate::auth::SESSION_COOKIE;
use crate::config::Config;
use actix_web::middleware::Next;
use actix_web::{
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    Error, HttpMessage, HttpResponse,
};

/// Gate in front of every management and attendance route. A request
/// without a valid session cookie is answered with a redirect to the
/// login form, never with the protected content.
pub async fn session_guard(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<actix_web::web::Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let claims = req
        .cookie(SESSION_COOKIE)
        .and_then(|c| verify_session(c.value(), &config.session_secret).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(SessionUser {
                username: claims.sub,
            });
            next.call(req).await
        }
        None => {
            let resp = HttpResponse::Found()
                .insert_header((header::LOCATION, "/login"))
                .finish();
            Ok(req.into_response(resp.map_into_boxed_body()))
        }
    }
}
