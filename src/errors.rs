use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::render::RenderError;

#[derive(Debug)]
pub enum AppError {
    /// Request carried no slides. The caller's fault.
    NoSlides,
    /// Document composition failed. Our fault; detail stays in the log.
    Render(RenderError),
    /// GEMINI_API_KEY is missing or empty.
    MissingApiKey,
    /// The content supplier (transport or upstream API) failed.
    Llm(String),
    Template(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoSlides => write!(f, "No slides provided"),
            AppError::Render(e) => write!(f, "Render error: {e}"),
            AppError::MissingApiKey => write!(f, "GEMINI_API_KEY is not configured"),
            AppError::Llm(e) => write!(f, "Content supplier error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NoSlides => HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "No slides provided" })),
            AppError::Render(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "Failed to generate presentation file" }))
            }
            AppError::MissingApiKey => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "GEMINI_API_KEY is not configured" }))
            }
            AppError::Llm(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Failed to generate presentation. Please try again."
                }))
            }
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::EmptyDeck => AppError::NoSlides,
            other => AppError::Render(other),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}
