//! Endpoint handlers and the route table.
//!
//! Handlers are plain functions from request data to a `Response`. `echo` is
//! the one async handler: it awaits the request body. The only shared state
//! they touch is a read of the `ServerState` snapshot.

pub mod docs;
pub mod introspect;
pub mod probe;
pub mod service;

use std::sync::Arc;

use axum::http::Method;

use crate::observability::ServerState;
use crate::routing::{async_handler, handler, MethodFilter, Route, RouteError, Router};

pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Register every endpoint against `state`.
pub fn routes(state: Arc<ServerState>) -> Result<Router, RouteError> {
    let root_state = Arc::clone(&state);
    let info_state = Arc::clone(&state);
    let metrics_state = state;

    Router::from_routes(vec![
        Route::new(
            Method::GET,
            "/",
            handler(move |_| service::root(&root_state)),
        ),
        Route::new(
            Method::GET,
            "/info",
            handler(move |_| service::info(&info_state)),
        ),
        Route::new(Method::GET, "/time", handler(|_| service::time())),
        Route::new(
            Method::GET,
            "/metrics",
            handler(move |_| service::metrics(&metrics_state)),
        ),
        Route::new(Method::GET, "/headers", handler(introspect::headers)),
        // The only route that reads the request body.
        Route::new(MethodFilter::Any, "/echo", async_handler(introspect::echo)),
        Route::new(Method::GET, "/health", handler(probe::health)),
        Route::new(Method::GET, "/hello", handler(probe::hello)),
        Route::new(Method::GET, "/openapi.yaml", handler(docs::openapi)),
        Route::new(Method::GET, "/docs", handler(docs::viewer)),
    ])
}
