//! Response construction and conversion.
//!
//! # Responsibilities
//! - Build structured (JSON), plain-text and static-asset responses
//! - Carry extra headers set by middleware (X-Request-ID)
//! - Convert into an axum response at the transport boundary
//!
//! # Design Decisions
//! - Body is fully materialized; every endpoint is small
//! - Content type is always explicit, never sniffed
//! - JSON serialization failure is logged and answered with 500, never a panic

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use bytes::Bytes;
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const CONTENT_TYPE_YAML: &str = "application/yaml";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// A response produced by a handler or middleware.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    content_type: &'static str,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, content_type: &'static str, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// 200 with a JSON-serialized body.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::new(StatusCode::OK, CONTENT_TYPE_JSON, body),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                Self::internal_error()
            }
        }
    }

    /// 200 with a plain-text body.
    pub fn text(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, CONTENT_TYPE_TEXT, body)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, CONTENT_TYPE_TEXT, "Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            CONTENT_TYPE_TEXT,
            "Internal Server Error",
        )
    }

    /// Set a header, replacing any earlier value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as UTF-8 text, for assertions and logging.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let mut response = (self.status, self.body).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type),
        );
        headers.extend(self.headers);
        response
    }
}
