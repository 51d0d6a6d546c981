//! Request introspection: headers and echo.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::http::{Request, Response};

#[derive(Debug, Serialize)]
pub struct HeaderDump {
    pub headers: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct Echo {
    pub method: String,
    pub query: String,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

/// `GET /headers`: every header with all of its values.
pub fn headers(req: &Request) -> Response {
    Response::json(&HeaderDump {
        headers: req.header_multimap(),
    })
}

/// `ANY /echo`: the request as received. An empty body echoes as `""`.
pub async fn echo(req: Request) -> Response {
    let method = req.method().to_string();
    let query = req.query().to_string();
    let headers = req.header_multimap();
    let body = req.read_body().await;

    Response::json(&Echo {
        method,
        query,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
