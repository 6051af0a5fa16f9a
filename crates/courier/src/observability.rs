//! Structured logging for client calls
//!
//! Every dispatched request is logged through a [`CallLog`]. Only the
//! method, host, URL path, status, sizes and timing are recorded. Bodies,
//! credentials, query strings and header values are never logged.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// Log context for one dispatched request.
#[derive(Debug)]
pub struct CallLog {
    method: String,
    host: String,
    path: String,
    body_size: usize,
    started: Instant,
}

impl CallLog {
    /// Record a request about to be sent and log it at debug level.
    ///
    /// Only the host and path of `url` are kept.
    pub fn sending(method: impl Into<String>, url: &str, body_size: usize) -> Self {
        let (host, path) = host_and_path(url);
        let log = Self {
            method: method.into(),
            host,
            path,
            body_size,
            started: Instant::now(),
        };
        debug!(
            method = %log.method,
            host = %log.host,
            path = %log.path,
            body_size = log.body_size,
            "Sending HTTP request"
        );
        log
    }

    /// Host (and port, when explicit) as logged.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// URL path as logged.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Time since the request was sent.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// A 2xx response arrived.
    pub fn succeeded(&self, status: u16, body_size: usize) {
        info!(
            method = %self.method,
            host = %self.host,
            path = %self.path,
            status,
            elapsed_ms = self.elapsed().as_millis(),
            body_size,
            "HTTP request succeeded"
        );
    }

    /// A response arrived with a status outside the success range.
    pub fn rejected(&self, status: u16, body_size: usize) {
        warn!(
            method = %self.method,
            host = %self.host,
            path = %self.path,
            status,
            elapsed_ms = self.elapsed().as_millis(),
            body_size,
            "HTTP request failed with unexpected status"
        );
    }

    /// No response arrived at all.
    pub fn transport_failed(&self, error: &dyn std::error::Error) {
        warn!(
            method = %self.method,
            host = %self.host,
            path = %self.path,
            elapsed_ms = self.elapsed().as_millis(),
            error = %error,
            "HTTP transport failed"
        );
    }
}

/// A response body from `url` could not be decoded into `expected`.
pub fn decode_failed(url: &str, expected: &str, reason: &str) {
    let (host, path) = host_and_path(url);
    debug!(
        host = %host,
        path = %path,
        expected = %expected,
        reason = %reason,
        "Response decoding failed"
    );
}

/// Host and path of `url`, with userinfo, query and fragment removed.
///
/// A string that does not parse as an absolute URL yields an empty host and
/// the part before any `?` or `#`.
pub fn host_and_path(url: &str) -> (String, String) {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = match (parsed.host_str(), parsed.port()) {
                (Some(host), Some(port)) => format!("{host}:{port}"),
                (Some(host), None) => host.to_string(),
                (None, _) => String::new(),
            };
            (host, parsed.path().to_string())
        }
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            (String::new(), path.to_string())
        }
    }
}
