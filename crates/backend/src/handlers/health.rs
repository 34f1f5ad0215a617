/// GET /health
///
/// Liveness probe for the static host.
pub async fn health() -> &'static str {
    "ok"
}
