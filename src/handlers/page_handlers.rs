use actix_web::HttpResponse;
use askama::Template;

use crate::errors::AppError;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

/// GET / — the chat page.
pub async fn index() -> Result<HttpResponse, AppError> {
    let html = IndexTemplate.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
