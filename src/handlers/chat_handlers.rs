use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::llm::GeminiClient;
use crate::models::chat::GenerateRequest;

/// POST /api/generate — forward the user's prompt to the content
/// supplier and relay its `{thoughts, slides}` reply.
///
/// The reply's slide array may be empty or only loosely related to the
/// deck sent in; the client decides what to do with it. Rendering
/// validates its own input, so nothing is checked here.
pub async fn generate(body: web::Json<GenerateRequest>) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let client = GeminiClient::from_env()?;

    log::info!(
        "generate request ({} chars, {} existing slides)",
        req.prompt.len(),
        req.slides.len()
    );

    let reply = client.generate(&req.prompt, &req.slides).await?;
    Ok(HttpResponse::Ok().json(reply))
}
