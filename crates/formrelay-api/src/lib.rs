/// FormRelay API - contact form relay Lambda
///
/// This module contains the HTTP surface of the relay: the Lambda adapter,
/// the router, error mapping and middleware.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
};
use formrelay_core::constants::{MAX_REQUEST_BODY_BYTES, MSG_INTERNAL_ERROR};
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::{error, info};

/// Build the relay router
///
/// Every method and path reaches the relay handler; the handler itself
/// applies the method policy.
pub fn app(ctx: Arc<ApiContext>) -> Router {
    let router = Router::new()
        .fallback(api::relay::handler)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Bodies up to the API Gateway max must reach the relay gates
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(ctx);

    middleware::with_cors_headers(router)
}

/// Main API handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri());

    let app = app(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    // Process request with Axum
    let response = match app.oneshot(axum_request).await {
        Ok(response) => response,
        Err(err) => match err {},
    };

    let (parts, body) = response.into_parts();

    // Convert Axum response body to Lambda response body
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => Ok(Response::from_parts(parts, lambda_body(bytes.to_vec()))),
        Err(err) => {
            error!("Failed to read response body: {}", err);
            Ok(internal_error_response())
        }
    }
}

fn lambda_body(bytes: Vec<u8>) -> Body {
    if bytes.is_empty() {
        return Body::Empty;
    }

    match String::from_utf8(bytes) {
        Ok(text) => Body::Text(text),
        Err(err) => Body::Binary(err.into_bytes()),
    }
}

fn internal_error_response() -> Response<Body> {
    let body = serde_json::json!({ "error": MSG_INTERNAL_ERROR }).to_string();

    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;

    let headers = response.headers_mut();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );
    middleware::insert_cors_headers(headers);

    response
}
