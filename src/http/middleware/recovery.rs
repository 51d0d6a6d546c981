//! Panic recovery.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;

use crate::http::middleware::Middleware;
use crate::http::{Request, Response};
use crate::routing::{async_handler, Handler};

/// Turn a panicking handler into a 500 so the connection task survives.
pub fn recovery() -> Middleware {
    Box::new(|next: Handler| {
        async_handler(move |req: Request| {
            let next = Arc::clone(&next);
            let method = req.method().clone();
            let path = req.path().to_string();

            async move {
                match AssertUnwindSafe(async move { next(req).await })
                    .catch_unwind()
                    .await
                {
                    Ok(response) => response,
                    Err(payload) => {
                        let reason = payload
                            .downcast_ref::<&str>()
                            .map(|s| s.to_string())
                            .or_else(|| payload.downcast_ref::<String>().cloned())
                            .unwrap_or_else(|| "unknown panic".to_string());
                        tracing::error!(
                            method = %method,
                            path = %path,
                            panic = %reason,
                            "Handler panicked"
                        );
                        Response::internal_error()
                    }
                }
            }
        })
    })
}
