//! Framework-neutral request data.
//!
//! # Responsibilities
//! - Carry method, path, raw query, headers and the unread body
//! - Read the body on demand, bounded by the configured limit
//! - Expose headers as an ordered multimap for the introspection handlers
//!
//! # Design Decisions
//! - Built from the request head as soon as it arrives; the body stays on the wire
//! - Only handlers that need the body read it
//! - An unreadable or oversized body reads as empty
//! - Query string kept raw (no decoding), path never includes it
//! - `HeaderMap` keeps every value of a repeated header in arrival order

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{request::Parts, HeaderMap, HeaderName, HeaderValue, Method};
use bytes::Bytes;

use crate::config::LimitsConfig;

/// Header carrying the correlation ID for a request.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request data handed to the middleware chain and handlers.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    query: String,
    headers: HeaderMap,
    body: Body,
    body_limit: usize,
}

impl Request {
    /// Build a request from a method and a `path?query` target.
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        Self {
            method,
            path: path.to_string(),
            query: query.to_string(),
            headers: HeaderMap::new(),
            body: Body::empty(),
            body_limit: LimitsConfig::default().max_body_bytes,
        }
    }

    /// Build a request from the transport head and its still-unread body.
    pub fn from_parts(parts: Parts, body: Body, body_limit: usize) -> Self {
        Self {
            path: parts.uri.path().to_string(),
            query: parts.uri.query().unwrap_or_default().to_string(),
            method: parts.method,
            headers: parts.headers,
            body,
            body_limit,
        }
    }

    /// Append a header value, keeping any earlier values for the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Body::from(body.into());
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string without the leading `?`; empty when absent.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, if present and valid UTF-8.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Read the whole body. A transport error or a body over the limit
    /// reads as empty.
    pub async fn read_body(self) -> Bytes {
        match axum::body::to_bytes(self.body, self.body_limit).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    method = %self.method,
                    path = %self.path,
                    limit = self.body_limit,
                    error = %e,
                    "Request body unreadable, treating as empty"
                );
                Bytes::new()
            }
        }
    }

    /// Every header name mapped to all of its values, in arrival order.
    pub fn header_multimap(&self) -> BTreeMap<String, Vec<String>> {
        let mut map = BTreeMap::new();
        for name in self.headers.keys() {
            let values = self
                .headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            map.insert(name.as_str().to_string(), values);
        }
        map
    }
}
