//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum transport, tracing layer)
//!     → request.rs (neutral Request: method, path, query, headers, unread body)
//!     → middleware/ (logging → recovery → counting)
//!     → routing (exact path, most specific method)
//!     → response.rs (status, content type, headers) → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{Request, X_REQUEST_ID};
pub use response::Response;
pub use server::HttpServer;
