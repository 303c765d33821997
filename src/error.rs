//! Failure kinds for a regeneration run. All of them abort the run.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API description could not be retrieved.
    #[error("failed to fetch API description from {location}: {reason}")]
    Fetch { location: String, reason: String },

    /// The body was retrieved but is not a usable API description.
    #[error("failed to decode API description from {location}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required boundary marker is missing from the target document.
    #[error("marker not found in target document: {marker:?}")]
    RegionNotFound { marker: String },

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn fetch(location: &str, reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn region_not_found(marker: &str) -> Self {
        Self::RegionNotFound {
            marker: marker.to_string(),
        }
    }

    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
