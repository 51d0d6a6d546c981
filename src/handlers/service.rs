//! Service identity, clock and request metrics.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::handlers::{SERVICE_NAME, SERVICE_VERSION};
use crate::http::Response;
use crate::observability::{format_uptime, ServerState};

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime: String,
    pub requests: u64,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub started: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentTime {
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsSummary {
    pub uptime: String,
    pub requests: u64,
}

/// `GET /`
pub fn root(state: &ServerState) -> Response {
    let snapshot = state.snapshot();
    Response::json(&ServiceStatus {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        uptime: format_uptime(snapshot.uptime),
        requests: snapshot.requests,
    })
}

/// `GET /info`
pub fn info(state: &ServerState) -> Response {
    Response::json(&ServiceInfo {
        name: SERVICE_NAME,
        version: SERVICE_VERSION,
        started: state
            .started_at()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// `GET /time`, RFC 3339 with nanoseconds in UTC.
pub fn time() -> Response {
    Response::json(&CurrentTime {
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
    })
}

/// `GET /metrics`
pub fn metrics(state: &ServerState) -> Response {
    let snapshot = state.snapshot();
    Response::json(&MetricsSummary {
        uptime: format_uptime(snapshot.uptime),
        requests: snapshot.requests,
    })
}
