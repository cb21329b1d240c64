use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Extension type for the per-request correlation ID.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Tags every request with a fresh UUID and echoes it back to the client in
/// the `X-Request-ID` response header.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "request received"
    );

    let mut response = next.run(request).await;

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("X-Request-ID", value);
    }

    response
}
