//! Minimal HTTP info service: service status, health, echo, request metrics
//! and embedded API docs.

pub mod config;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::ServerState;
