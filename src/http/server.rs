//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table and middleware chain once
//! - Create the Axum transport (tracing layer, single fallback handler)
//! - Hand a neutral `Request` to the chain as soon as the head arrives
//! - Serve until the shutdown signal, then drain

use std::sync::Arc;

use axum::{
    extract::{Request as AxumRequest, State},
    response::{IntoResponse, Response as AxumResponse},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::http::middleware::{self, Middleware};
use crate::http::Request;
use crate::observability::ServerState;
use crate::routing::{Handler, RouteError};

/// Application state injected into the transport handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Handler,
    pub max_body_bytes: usize,
}

/// HTTP server for the info endpoints.
pub struct HttpServer {
    router: Router,
    state: Arc<ServerState>,
}

impl HttpServer {
    /// Create a new HTTP server with a fresh counter registry.
    pub fn new(config: ServerConfig) -> Result<Self, RouteError> {
        Self::with_state(config, Arc::new(ServerState::new()))
    }

    /// Create a server around an existing counter registry.
    pub fn with_state(config: ServerConfig, state: Arc<ServerState>) -> Result<Self, RouteError> {
        let routes = handlers::routes(Arc::clone(&state))?;
        tracing::debug!(routes = routes.len(), "Route table built");

        let pipeline = middleware::chain(default_layers(&state), routes.into_handler());
        let app_state = AppState {
            pipeline,
            max_body_bytes: config.limits.max_body_bytes,
        };
        let router = Self::build_router(app_state);

        Ok(Self { router, state })
    }

    /// Build the Axum router. Every path goes to the same dispatcher.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Counter registry shared with the handlers.
    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    /// The Axum router, for driving the transport in-process.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Logging → recovery → counting.
pub fn default_layers(state: &Arc<ServerState>) -> Vec<Middleware> {
    vec![
        middleware::logging(),
        middleware::recovery(),
        middleware::counting(Arc::clone(state)),
    ]
}

/// Transport handler: run the chain. The body is left for handlers to read.
async fn dispatch(State(state): State<AppState>, request: AxumRequest) -> AxumResponse {
    let (parts, body) = request.into_parts();
    let request = Request::from_parts(parts, body, state.max_body_bytes);
    (state.pipeline)(request).await.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, StatusCode};
    use tower::ServiceExt;

    async fn send(router: Router, request: axum::http::Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_through_transport() {
        let server = HttpServer::new(ServerConfig::default()).unwrap();
        let (status, body) = send(server.into_router(), get("/health?verbose=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn unmatched_path_is_404_and_counted() {
        let server = HttpServer::new(ServerConfig::default()).unwrap();
        let state = server.state();
        let (status, _) = send(server.into_router(), get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(state.snapshot().requests, 1);
    }

    #[tokio::test]
    async fn oversized_body_echoes_as_empty() {
        let mut config = ServerConfig::default();
        config.limits.max_body_bytes = 4;
        let server = HttpServer::new(config).unwrap();

        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .body(Body::from("far too long"))
            .unwrap();
        let (status, body) = send(server.into_router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""body":"""#), "{body}");
    }

    #[tokio::test]
    async fn request_id_header_is_set() {
        let server = HttpServer::new(ServerConfig::default()).unwrap();
        let response = server.into_router().oneshot(get("/hello")).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[tokio::test]
    async fn router_clones_share_state() {
        let server = HttpServer::new(ServerConfig::default()).unwrap();
        let state = server.state();
        let router = server.into_router();

        send(router.clone(), get("/")).await;
        let (_, body) = send(router, get("/metrics")).await;

        assert!(body.contains(r#""requests":2"#), "{body}");
        assert_eq!(state.snapshot().requests, 2);
    }
}
