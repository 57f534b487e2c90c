use axum::response::Html;

/// Single-page client for `/check/stream`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
