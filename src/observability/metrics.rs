//! Process-wide request counters.
//!
//! # Responsibilities
//! - Record the process start time (monotonic and wall-clock)
//! - Count every request that enters the counting middleware
//! - Produce point-in-time snapshots for the info and metrics endpoints
//!
//! # Design Decisions
//! - A single `AtomicU64`, no locks: increments are wait-free
//! - SeqCst ordering so a snapshot observes every increment that finished first
//! - Shared through `Arc` and passed explicitly, never a global

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Counter registry shared by every request task.
#[derive(Debug)]
pub struct ServerState {
    started: Instant,
    started_at: DateTime<Utc>,
    request_count: AtomicU64,
}

/// Point-in-time read of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub uptime: Duration,
    pub requests: u64,
}

impl ServerState {
    /// Create a registry whose clock starts now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Count one inbound request.
    pub fn increment(&self) {
        self.request_count.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current request count and elapsed uptime.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            requests: self.request_count.load(Ordering::SeqCst),
            uptime: self.started.elapsed(),
        }
    }

    /// Wall-clock time at which the registry was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a duration as `2h3m4.005s`, dropping leading zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let millis = uptime.subsec_millis();

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}.{millis:03}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}.{millis:03}s")
    } else {
        format!("{seconds}.{millis:03}s")
    }
}
