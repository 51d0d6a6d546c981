//! Liveness and greeting.

use serde::Serialize;

use crate::http::{Request, Response};

pub const GREETING: &str = "Hello, World!";

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// `GET /health`: liveness only, no dependency checks.
pub fn health(_req: &Request) -> Response {
    Response::text("OK")
}

/// `GET /hello`
pub fn hello(_req: &Request) -> Response {
    Response::json(&Greeting { message: GREETING })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::CONTENT_TYPE_JSON;
    use axum::http::{HeaderName, HeaderValue, Method, StatusCode};

    #[test]
    fn health_ignores_query_and_headers() {
        let requests = [
            Request::new(Method::GET, "/health"),
            Request::new(Method::GET, "/health?deep=true&check=db"),
            Request::new(Method::GET, "/health").with_header(
                HeaderName::from_static("accept"),
                HeaderValue::from_static("application/json"),
            ),
        ];
        for req in &requests {
            let response = health(req);
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.body_text(), "OK");
        }
    }

    #[test]
    fn hello_is_json_greeting() {
        let response = hello(&Request::new(Method::GET, "/hello"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.content_type(), CONTENT_TYPE_JSON);
        assert_eq!(response.body_text(), r#"{"message":"Hello, World!"}"#);
    }
}
