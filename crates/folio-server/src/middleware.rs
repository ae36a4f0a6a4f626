//! Folio Middleware
//!
//! HTTP middleware for cross-cutting concerns. Every response carries an
//! `x-request-id` header so a client report can be matched to a trace span.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response},
    middleware::Next,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Request ID Middleware
// =============================================================================

/// Add a unique request ID to each request and its response.
///
/// An ID supplied by the caller is kept as-is.
pub async fn request_id(mut request: Request<Body>, next: Next) -> Response<Body> {
    let header = match request.headers().get(REQUEST_ID_HEADER) {
        Some(existing) => existing.clone(),
        None => HeaderValue::from_str(&Uuid::new_v4().to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
    };

    request.headers_mut().insert(REQUEST_ID_HEADER, header.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, header);
    response
}
