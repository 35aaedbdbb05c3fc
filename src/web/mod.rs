//! Gallery view and upload widgets
//!
//! The browser UI is embedded into the binary at compile time and served
//! as three static assets; there is no separate frontend build step.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

const INDEX_HTML: &str = include_str!("assets/index.html");
const APP_JS: &str = include_str!("assets/app.js");
const STYLES_CSS: &str = include_str!("assets/styles.css");

/// Create routes for the gallery UI
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/assets/app.js", get(app_js))
        .route("/assets/styles.css", get(styles_css))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn app_js() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    )
}

async fn styles_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES_CSS)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    #[tokio::test]
    async fn serves_the_gallery_page() {
        let server = TestServer::new(super::routes()).unwrap();

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains("Imagedrop"));
    }

    #[tokio::test]
    async fn serves_the_script_with_its_content_type() {
        let server = TestServer::new(super::routes()).unwrap();

        let response = server.get("/assets/app.js").await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert!(content_type
            .to_str()
            .unwrap()
            .starts_with("application/javascript"));
    }
}
