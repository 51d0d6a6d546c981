//! Request interceptors.
//!
//! # Data Flow
//! ```text
//! Request
//!     → logging.rs (request ID, span, completion event)
//!     → recovery.rs (panic → 500)
//!     → counting.rs (ServerState::increment)
//!     → Router endpoint
//! ```
//!
//! # Design Decisions
//! - A middleware takes the next handler and returns a wrapped handler
//! - Composition is plain function wrapping, independent of axum's layers
//! - The chain is built once and shared by every connection

pub mod counting;
pub mod logging;
pub mod recovery;

pub use counting::counting;
pub use logging::logging;
pub use recovery::recovery;

use crate::routing::Handler;

/// Wraps a handler in another handler.
pub type Middleware = Box<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Compose `layers` around `endpoint`. The first layer is the outermost.
pub fn chain(layers: Vec<Middleware>, endpoint: Handler) -> Handler {
    layers
        .into_iter()
        .rev()
        .fold(endpoint, |next, layer| layer(next))
}
