//! Method matching logic.
//!
//! # Responsibilities
//! - Describe which methods a route accepts
//! - Rank filters so the most specific one wins (see `Router::dispatch`)
//!
//! # Design Decisions
//! - Method matching is exact (no implicit HEAD for GET)
//! - Wildcard = matches every method, lowest specificity

use std::fmt;

use axum::http::Method;

/// Which methods a route accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MethodFilter {
    /// Exactly one method.
    Only(Method),
    /// Any method.
    Any,
}

impl From<Method> for MethodFilter {
    fn from(method: Method) -> Self {
        MethodFilter::Only(method)
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFilter::Only(method) => write!(f, "{method}"),
            MethodFilter::Any => write!(f, "ANY"),
        }
    }
}
