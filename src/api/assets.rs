use crate::config::Config;
use actix_files::NamedFile;
use actix_web::{error::ErrorNotFound, web, HttpRequest};
use std::path::Path;

/// Stream a stored file by name. Filenames carrying separators or a
/// `..` component are refused outright so a request can never reach
/// outside the storage directory.
async fn serve_from(dir: &Path, filename: &str, req: &HttpRequest) -> actix_web::Result<actix_web::HttpResponse> {
    if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
        return Err(ErrorNotFound("no such file"));
    }

    let file = NamedFile::open_async(dir.join(filename))
        .await
        .map_err(|_| ErrorNotFound("no such file"))?;

    Ok(file.into_response(req))
}

pub async fn photo(
    path: web::Path<String>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> actix_web::Result<actix_web::HttpResponse> {
    serve_from(&config.upload_dir, &path.into_inner(), &req).await
}

pub async fn qr_image(
    path: web::Path<String>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> actix_web::Result<actix_web::HttpResponse> {
    serve_from(&config.qrcode_dir, &path.into_inner(), &req).await
}
