//! API version reporting
//!
//! Every response of a versioned route advertises the versions this
//! server supports.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

pub const API_SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";

pub const SUPPORTED_VERSIONS: &str = "1.0";

pub async fn api_version_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        HeaderName::from_static(API_SUPPORTED_VERSIONS_HEADER),
        HeaderValue::from_static(SUPPORTED_VERSIONS),
    );
    response
}
