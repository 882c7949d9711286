/// Endpoint-contract tests for POST /api/download: validation failures
/// are the caller's fault (400 with a fixed JSON body, produced before
/// any document library runs), success returns a whole file attachment.

use actix_web::{test, web, App};

use deckgen::handlers::download_handlers::download;

macro_rules! service {
    () => {
        test::init_service(App::new().route("/api/download", web::post().to(download))).await
    };
}

#[actix_web::test]
async fn empty_slides_returns_400() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/api/download")
        .set_json(serde_json::json!({ "slides": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No slides provided");
}

#[actix_web::test]
async fn missing_slides_returns_400() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/api/download")
        .set_json(serde_json::json!({ "format": "pdf" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn pptx_download_is_an_attachment() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/api/download")
        .set_json(serde_json::json!({
            "slides": [{ "title": "Intro", "content": "Welcome" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let headers = resp.headers();
    assert_eq!(
        headers.get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    );
    assert_eq!(
        headers.get("Content-Disposition").unwrap(),
        "attachment; filename=\"presentation.pptx\""
    );

    let body = test::read_body(resp).await;
    assert_eq!(&body[..4], b"PK\x03\x04");
}

#[actix_web::test]
async fn pdf_format_selector_switches_renderer() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/api/download")
        .set_json(serde_json::json!({
            "slides": [{ "title": "Intro", "content": "", "backgroundColor": "#5B6B6F", "image": true }],
            "format": "pdf"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let headers = resp.headers();
    assert_eq!(headers.get("Content-Type").unwrap(), "application/pdf");
    assert_eq!(
        headers.get("Content-Disposition").unwrap(),
        "attachment; filename=\"presentation.pdf\""
    );

    let body = test::read_body(resp).await;
    assert_eq!(&body[..5], b"%PDF-");
}

#[actix_web::test]
async fn unknown_format_is_a_client_error() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/api/download")
        .set_json(serde_json::json!({
            "slides": [{ "title": "Intro" }],
            "format": "docx"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn image_flag_tolerates_string_values() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/api/download")
        .set_json(serde_json::json!({
            "slides": [{ "title": "Intro", "image": "hero photo" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
