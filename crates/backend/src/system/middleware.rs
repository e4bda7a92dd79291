use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware: method, path, status and duration
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();
    if status < 400 {
        tracing::info!("{status} {method} {path} {duration_ms}ms");
    } else {
        tracing::warn!("{status} {method} {path} {duration_ms}ms");
    }

    response
}
