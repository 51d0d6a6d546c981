//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → counting middleware → metrics.rs (ServerState::increment)
//!     → logging middleware → logging.rs subscriber (structured events)
//!
//! Consumers:
//!     → GET / and GET /metrics read ServerState::snapshot
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Metrics are cheap (one atomic increment per request)
//! - Request ID flows through the request span

pub mod logging;
pub mod metrics;

pub use metrics::{format_uptime, ServerState, Snapshot};
