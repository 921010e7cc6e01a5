use crate::{
    api::{assets, attendance, employee},
    auth::{handlers, middleware::session_guard},
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Public routes: the login form and the stored images, which the
    // scan client fetches without a session.
    cfg.service(
        web::resource("/login")
            .route(web::get().to(handlers::login_form))
            .route(web::post().to(handlers::login)),
    )
    .service(web::resource("/uploads/{filename}").route(web::get().to(assets::photo)))
    .service(web::resource("/qrcodes/{filename}").route(web::get().to(assets::qr_image)));

    // Everything else sits behind the session guard.
    cfg.service(
        web::scope("")
            .wrap(from_fn(session_guard))
            .service(web::resource("/").route(web::get().to(employee::index)))
            .service(web::resource("/logout").route(web::get().to(handlers::logout)))
            .service(
                web::resource("/add")
                    .route(web::get().to(employee::add_form))
                    .route(web::post().to(employee::add)),
            )
            .service(
                web::resource("/edit/{id}")
                    .route(web::get().to(employee::edit_form))
                    .route(web::post().to(employee::edit)),
            )
            .service(web::resource("/delete/{id}").route(web::get().to(employee::delete)))
            .service(web::resource("/attendance_scan").route(web::get().to(attendance::scan_page)))
            .service(
                web::resource("/mark_attendance").route(web::post().to(attendance::mark_attendance)),
            )
            .service(
                web::resource("/attendance_dashboard").route(web::get().to(attendance::dashboard)),
            ),
    );
}
