//! Request logging with correlation IDs.
//!
//! An inbound `x-request-id` is reused; otherwise a UUID v4 is generated.
//! The ID is recorded on the request span and echoed on the response.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

use crate::http::middleware::Middleware;
use crate::http::request::X_REQUEST_ID;
use crate::http::Request;
use crate::routing::{async_handler, Handler};

pub fn logging() -> Middleware {
    Box::new(|next: Handler| {
        async_handler(move |req: Request| {
            let next = Arc::clone(&next);
            let request_id = req
                .header_str(X_REQUEST_ID)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            let span = tracing::info_span!(
                "request",
                request_id = %request_id,
                method = %req.method(),
                path = %req.path()
            );

            async move {
                let start = Instant::now();
                let response = next(req).await;

                tracing::info!(
                    status = response.status().as_u16(),
                    latency_us = latency_micros(start.elapsed()),
                    "Request completed"
                );

                match HeaderValue::from_str(&request_id) {
                    Ok(value) => response.with_header(HeaderName::from_static(X_REQUEST_ID), value),
                    Err(_) => response,
                }
            }
            .instrument(span)
        })
    })
}

/// Whole microseconds, saturating at `u64::MAX`.
fn latency_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
