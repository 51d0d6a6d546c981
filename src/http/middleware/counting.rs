//! Request counting.

use std::sync::Arc;

use crate::http::middleware::Middleware;
use crate::http::Request;
use crate::observability::ServerState;
use crate::routing::{async_handler, Handler};

/// Count every request exactly once, before the rest of the chain runs.
///
/// Unmatched paths are counted too: the router decides 404 only after this.
/// The body has not been read yet, so a request still uploading is counted.
pub fn counting(state: Arc<ServerState>) -> Middleware {
    Box::new(move |next: Handler| {
        let state = Arc::clone(&state);
        async_handler(move |req: Request| {
            let state = Arc::clone(&state);
            let next = Arc::clone(&next);
            async move {
                state.increment();
                next(req).await
            }
        })
    })
}
