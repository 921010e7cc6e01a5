use crate::auth::token::verify_session;
use crate::auth::SESSION_COOKIE;
use crate::config::Config;
use actix_web::{
    dev::Payload, error::ErrorUnauthorized, web::Data, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::{ready, Ready};

/// Identity of the logged-in operator, extracted from the session cookie.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub username: String,
}

impl FromRequest for SessionUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // The guard middleware stores the identity for routes behind it.
        if let Some(user) = req.extensions().get::<SessionUser>() {
            return ready(Ok(user.clone()));
        }

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Config missing",
                )))
            }
        };

        let claims = req
            .cookie(SESSION_COOKIE)
            .and_then(|c| verify_session(c.value(), &config.session_secret).ok());

        match claims {
            Some(claims) => ready(Ok(SessionUser {
                username: claims.sub,
            })),
            None => ready(Err(ErrorUnauthorized("No session"))),
        }
    }
}
