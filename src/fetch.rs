//! Source retrieval — a single attempt, bounded by a timeout, no retries.
//!
//! `http://` and `https://` locations are fetched over the network. Anything
//! else is read from disk, with an optional `file://` prefix.

use crate::error::{Error, Result};
use crate::model::SourceDocument;
use log::debug;
use std::fs;
use std::time::Duration;

/// Fetch and decode the API description at `location`.
pub fn load(location: &str, timeout: Duration) -> Result<SourceDocument> {
    let body = fetch(location, timeout)?;
    debug!("received {} bytes from {}", body.len(), location);
    decode(location, &body)
}

/// Retrieve the raw body. Transport failures, non-2xx statuses and unreadable
/// local files are all reported as [`Error::Fetch`].
pub fn fetch(location: &str, timeout: Duration) -> Result<String> {
    if is_remote(location) {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let response = agent.get(location).call().map_err(|e| match e {
            ureq::Error::Status(code, response) => Error::fetch(
                location,
                format!("server returned {} {}", code, response.status_text()),
            ),
            ureq::Error::Transport(transport) => Error::fetch(location, transport),
        })?;
        response
            .into_string()
            .map_err(|e| Error::fetch(location, e))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        fs::read_to_string(path).map_err(|e| Error::fetch(location, e))
    }
}

/// Decode a body as an API description.
pub fn decode(location: &str, body: &str) -> Result<SourceDocument> {
    serde_json::from_str(body).map_err(|source| Error::Decode {
        location: location.to_string(),
        source,
    })
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
