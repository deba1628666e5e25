//! API Middleware
//!
//! Request logging with sensitive-header masking.

use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie"];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let headers = mask_headers_for_logging(request.headers());

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}
