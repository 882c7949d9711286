use actix_web::{middleware, web, App, HttpServer};

use deckgen::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    if std::env::var("GEMINI_API_KEY").map(|v| v.is_empty()).unwrap_or(true) {
        log::warn!("GEMINI_API_KEY not set — /api/generate will return an error");
    }

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind}");

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .service(actix_files::Files::new("/static", "./static"))
            .route("/", web::get().to(handlers::page_handlers::index))
            .route("/api/generate", web::post().to(handlers::chat_handlers::generate))
            .route("/api/download", web::post().to(handlers::download_handlers::download))
    })
    .bind(bind)?
    .run()
    .await
}
