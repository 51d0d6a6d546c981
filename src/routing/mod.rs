//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (path lookup)
//!     → matcher.rs (method filter, exact before wildcard)
//!     → Return: matched Handler or NoMatch
//!
//! Route registration (at startup):
//!     handlers::routes(state)
//!     → Router::register for each (method, path, handler)
//!     → Freeze as immutable Router inside the middleware chain
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime
//! - Exact string paths only, no patterns
//! - Deterministic: same input always matches same route
//! - Most specific method wins

pub mod matcher;
pub mod router;

pub use matcher::MethodFilter;
pub use router::{async_handler, handler, Handler, Route, RouteError, RouteMatch, Router};
