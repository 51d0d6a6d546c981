//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store registered routes
//! - Look up the handler for a (method, path) pair
//! - Return matched handler or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) path lookup via HashMap, then O(1) method lookup
//! - Exact method beats wildcard, independent of registration order
//! - Duplicate registrations are rejected instead of silently shadowed

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::http::Method;
use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::http::{Request, Response};
use crate::routing::matcher::MethodFilter;

/// A request handler. Handlers and middleware-wrapped handlers share this type.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// Wrap a synchronous closure or function as a [`Handler`].
///
/// The closure runs when the returned future is first polled.
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Request) -> Response + Send + Sync + 'static,
{
    let f = Arc::new(f);
    Arc::new(move |req: Request| -> BoxFuture<'static, Response> {
        let f = Arc::clone(&f);
        Box::pin(async move { f(&req) })
    })
}

/// Wrap an async closure or function as a [`Handler`].
pub fn async_handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req: Request| -> BoxFuture<'static, Response> { Box::pin(f(req)) })
}

/// Error type for route registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route {method} {path} is already registered")]
    Duplicate { method: MethodFilter, path: String },

    #[error("route path {0:?} must start with '/'")]
    InvalidPath(String),
}

/// A (method, path) pair mapped to a handler.
#[derive(Clone)]
pub struct Route {
    pub method: MethodFilter,
    pub path: String,
    pub handler: Handler,
}

impl Route {
    pub fn new(method: impl Into<MethodFilter>, path: impl Into<String>, handler: Handler) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            handler,
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Result of a route lookup.
pub enum RouteMatch<'a> {
    Matched(&'a Handler),
    NoMatch,
}

impl<'a> RouteMatch<'a> {
    pub fn handler(&self) -> Option<&'a Handler> {
        match self {
            RouteMatch::Matched(handler) => Some(*handler),
            RouteMatch::NoMatch => None,
        }
    }
}

#[derive(Default)]
struct PathRoutes {
    exact: HashMap<Method, Handler>,
    any: Option<Handler>,
}

/// Exact-path router.
#[derive(Default)]
pub struct Router {
    paths: HashMap<String, PathRoutes>,
    len: usize,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from a list of routes, failing on the first conflict.
    pub fn from_routes(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut router = Self::new();
        for route in routes {
            router.register(route.method, &route.path, route.handler)?;
        }
        Ok(router)
    }

    /// Register a handler. Only called while building the server.
    pub fn register(
        &mut self,
        method: impl Into<MethodFilter>,
        path: &str,
        handler: Handler,
    ) -> Result<(), RouteError> {
        let method = method.into();
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let entry = self.paths.entry(path.to_string()).or_default();
        let duplicate = || RouteError::Duplicate {
            method: method.clone(),
            path: path.to_string(),
        };

        match &method {
            MethodFilter::Only(m) => {
                if entry.exact.contains_key(m) {
                    return Err(duplicate());
                }
                entry.exact.insert(m.clone(), handler);
            }
            MethodFilter::Any => {
                if entry.any.is_some() {
                    return Err(duplicate());
                }
                entry.any = Some(handler);
            }
        }

        self.len += 1;
        tracing::debug!(method = %method, path = %path, "Route registered");
        Ok(())
    }

    /// Find the handler for a request. Exact method first, then wildcard.
    pub fn dispatch(&self, method: &Method, path: &str) -> RouteMatch<'_> {
        let Some(entry) = self.paths.get(path) else {
            return RouteMatch::NoMatch;
        };
        match entry.exact.get(method).or(entry.any.as_ref()) {
            Some(handler) => RouteMatch::Matched(handler),
            None => RouteMatch::NoMatch,
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Turn the router into the innermost endpoint; no match becomes 404.
    pub fn into_handler(self) -> Handler {
        Arc::new(move |req: Request| -> BoxFuture<'static, Response> {
            let matched = self.dispatch(req.method(), req.path()).handler().cloned();
            match matched {
                Some(handler) => handler(req),
                None => Box::pin(async { Response::not_found() }),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn named(body: &'static str) -> Handler {
        handler(move |_| Response::text(body))
    }

    async fn run(router: &Router, method: Method, path: &str) -> Option<String> {
        let req = Request::new(method.clone(), path);
        let handler = router.dispatch(&method, path).handler()?.clone();
        Some(handler(req).await.body_text())
    }

    fn matched(router: &Router, method: &Method, path: &str) -> bool {
        router.dispatch(method, path).handler().is_some()
    }

    #[tokio::test]
    async fn exact_path_only() {
        let mut router = Router::new();
        router.register(Method::GET, "/health", named("health")).unwrap();

        assert_eq!(run(&router, Method::GET, "/health").await.as_deref(), Some("health"));
        assert!(!matched(&router, &Method::GET, "/health/"));
        assert!(!matched(&router, &Method::GET, "/healthz"));
        assert!(!matched(&router, &Method::GET, "/"));
    }

    #[test]
    fn exact_method_only() {
        let mut router = Router::new();
        router.register(Method::GET, "/info", named("info")).unwrap();

        assert!(matched(&router, &Method::GET, "/info"));
        assert!(!matched(&router, &Method::POST, "/info"));
        assert!(!matched(&router, &Method::HEAD, "/info"));
    }

    #[tokio::test]
    async fn wildcard_matches_every_method() {
        let mut router = Router::new();
        router.register(MethodFilter::Any, "/echo", named("echo")).unwrap();

        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            assert_eq!(run(&router, method, "/echo").await.as_deref(), Some("echo"));
        }
    }

    #[tokio::test]
    async fn exact_beats_wildcard_when_registered_first() {
        let mut router = Router::new();
        router.register(Method::POST, "/echo", named("exact")).unwrap();
        router.register(MethodFilter::Any, "/echo", named("any")).unwrap();

        assert_eq!(run(&router, Method::POST, "/echo").await.as_deref(), Some("exact"));
        assert_eq!(run(&router, Method::GET, "/echo").await.as_deref(), Some("any"));
    }

    #[tokio::test]
    async fn exact_beats_wildcard_when_registered_last() {
        let mut router = Router::new();
        router.register(MethodFilter::Any, "/echo", named("any")).unwrap();
        router.register(Method::POST, "/echo", named("exact")).unwrap();

        assert_eq!(run(&router, Method::POST, "/echo").await.as_deref(), Some("exact"));
        assert_eq!(run(&router, Method::GET, "/echo").await.as_deref(), Some("any"));
    }

    #[test]
    fn dispatch_is_deterministic() {
        let mut router = Router::new();
        router.register(Method::GET, "/a", named("a")).unwrap();
        router.register(MethodFilter::Any, "/a", named("any")).unwrap();
        router.register(Method::GET, "/b", named("b")).unwrap();

        let first = router.dispatch(&Method::GET, "/a").handler().cloned().unwrap();
        for _ in 0..100 {
            let again = router.dispatch(&Method::GET, "/a").handler().unwrap();
            assert!(Arc::ptr_eq(&first, again));
        }
    }

    #[test]
    fn unmatched_path_is_not_found_for_every_method() {
        let mut router = Router::new();
        router.register(MethodFilter::Any, "/echo", named("echo")).unwrap();
        router.register(Method::GET, "/", named("root")).unwrap();

        for method in [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::HEAD,
            Method::OPTIONS,
        ] {
            assert!(!matched(&router, &method, "/missing"));
        }
    }

    #[tokio::test]
    async fn duplicate_registration_rejected() {
        let mut router = Router::new();
        router.register(Method::GET, "/x", named("1")).unwrap();
        router.register(MethodFilter::Any, "/x", named("2")).unwrap();

        assert_eq!(
            router.register(Method::GET, "/x", named("3")),
            Err(RouteError::Duplicate {
                method: MethodFilter::Only(Method::GET),
                path: "/x".into()
            })
        );
        assert!(matches!(
            router.register(MethodFilter::Any, "/x", named("4")),
            Err(RouteError::Duplicate { .. })
        ));
        assert_eq!(router.len(), 2);
        assert_eq!(run(&router, Method::GET, "/x").await.as_deref(), Some("1"));
    }

    #[test]
    fn path_must_be_absolute() {
        let mut router = Router::new();
        assert_eq!(
            router.register(Method::GET, "health", named("h")),
            Err(RouteError::InvalidPath("health".into()))
        );
        assert!(router.is_empty());
    }

    #[tokio::test]
    async fn from_routes_builds_table() {
        let router = Router::from_routes(vec![
            Route::new(Method::GET, "/a", named("a")),
            Route::new(MethodFilter::Any, "/b", named("b")),
        ])
        .unwrap();
        assert_eq!(router.len(), 2);
        assert_eq!(run(&router, Method::DELETE, "/b").await.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn endpoint_answers_404_on_no_match() {
        let mut router = Router::new();
        router.register(Method::GET, "/a", named("a")).unwrap();
        let endpoint = router.into_handler();

        let hit = endpoint(Request::new(Method::GET, "/a?x=1")).await;
        assert_eq!(hit.status(), StatusCode::OK);
        assert_eq!(hit.body_text(), "a");

        let miss = endpoint(Request::new(Method::GET, "/b")).await;
        assert_eq!(miss.status(), StatusCode::NOT_FOUND);
    }
}
