//! GET / -- the chat page.
//!
//! The page is compiled into the binary so the server works from any
//! working directory.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../web/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
