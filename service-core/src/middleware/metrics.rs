use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Record request count and latency per route template.
///
/// Attach with `Router::route_layer` so `MatchedPath` is always present.
pub async fn metrics_middleware(path: MatchedPath, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = path.as_str().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    let labels = [("method", method), ("path", path), ("status", status)];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn passes_matched_route_through() {
        let app = Router::new()
            .route("/items/:id", get(|| async { "item" }))
            .route_layer(from_fn(metrics_middleware));

        let response = app
            .oneshot(
                http::Request::builder()
                    .uri("/items/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), http::StatusCode::OK);
    }
}
