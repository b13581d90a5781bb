//! The browser page, compiled into the binary and served next to the API.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

pub const INDEX_HTML: &str = include_str!("../assets/index.html");
pub const MAIN_JS: &str = include_str!("../assets/main.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
