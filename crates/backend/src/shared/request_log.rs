use crate::shared::format::format_body_size;
use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

/// One console line per request: time | latency | size | status method path.
///
/// Cyan timestamp for 2xx, brown otherwise.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let size = content_length(response.headers());
    let color_code = if status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        chrono::Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_body_size(size),
        status.as_u16(),
        method,
        uri.path()
    );
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), "request served");

    response
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
