//! Embedded API documentation.

use axum::http::StatusCode;

use crate::http::response::{CONTENT_TYPE_HTML, CONTENT_TYPE_YAML};
use crate::http::{Request, Response};

/// OpenAPI document, bundled at compile time.
pub const OPENAPI_DOCUMENT: &str = include_str!("../../assets/openapi.yaml");

/// HTML viewer that loads `/openapi.yaml`.
pub const DOCS_PAGE: &str = include_str!("../../assets/docs.html");

/// `GET /openapi.yaml`
pub fn openapi(_req: &Request) -> Response {
    Response::new(StatusCode::OK, CONTENT_TYPE_YAML, OPENAPI_DOCUMENT)
}

/// `GET /docs`
pub fn viewer(_req: &Request) -> Response {
    Response::new(StatusCode::OK, CONTENT_TYPE_HTML, DOCS_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn document_lists_every_path() {
        for path in [
            "/:", "/info:", "/time:", "/headers:", "/echo:", "/metrics:", "/health:", "/hello:",
        ] {
            assert!(OPENAPI_DOCUMENT.contains(path), "missing {path}");
        }
    }

    #[test]
    fn viewer_references_document() {
        let response = viewer(&Request::new(Method::GET, "/docs"));
        assert_eq!(response.content_type(), CONTENT_TYPE_HTML);
        assert!(response.body_text().contains("/openapi.yaml"));
    }

    #[test]
    fn openapi_is_yaml() {
        let response = openapi(&Request::new(Method::GET, "/openapi.yaml"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.content_type(), CONTENT_TYPE_YAML);
        assert!(response.body_text().starts_with("openapi:"));
    }
}
