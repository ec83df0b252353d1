use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};
use tracing::info;

/// Records every inbound request before routing: ISO-8601 UTC timestamp,
/// method, and the original path (query string included). Purely
/// observational.
pub async fn access_log(req: Request, next: Next) -> Response {
    let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    info!("[{}] {} {}", time, req.method(), req.uri());
    next.run(req).await
}
