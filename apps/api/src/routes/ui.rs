use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Upload page; renders the JSON returned by POST /api/v1/evaluations.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
