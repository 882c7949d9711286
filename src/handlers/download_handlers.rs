use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::chat::DownloadRequest;
use crate::render;

/// POST /api/download — render the posted deck and return it as a file
/// attachment. Format defaults to the presentation archive.
pub async fn download(body: web::Json<DownloadRequest>) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    if req.slides.is_empty() {
        return Err(AppError::NoSlides);
    }

    let format = req.format.unwrap_or_default();
    let file = render::render_deck(&req.slides, format)?;

    log::info!(
        "rendered {} slides to {} ({} bytes)",
        req.slides.len(),
        file.filename,
        file.bytes.len()
    );

    Ok(HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", file.filename),
        ))
        .body(file.bytes))
}
