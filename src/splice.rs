//! Marker-delimited region replacement in the target document.
//!
//! Markers are located by exact substring search and kept verbatim, so
//! splicing a document that was itself produced by a splice finds the same
//! boundaries again.

use crate::error::{Error, Result};
use log::{debug, warn};

/// Opens the API reference body region.
pub const BODY_START: &str =
    r#"<div class="no-results" id="no-results">No endpoints match your search.</div>"#;
/// Closes the API reference body region.
pub const BODY_END: &str = "</section><!-- /api-reference -->";
/// Opens the sidebar links for the API reference.
pub const SIDEBAR_START: &str = r#"<div class="nav-section-label">API Reference</div>"#;
/// Label of the sidebar section following the API reference links.
pub const SIDEBAR_END: &str = r#"<div class="nav-section-label">More</div>"#;

/// Boundary strings for the two mutable regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub body_start: String,
    pub body_end: String,
    pub sidebar_start: String,
    pub sidebar_end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            body_start: BODY_START.to_string(),
            body_end: BODY_END.to_string(),
            sidebar_start: SIDEBAR_START.to_string(),
            sidebar_end: SIDEBAR_END.to_string(),
        }
    }
}

/// A document split around one marker-delimited region.
#[derive(Debug, PartialEq, Eq)]
pub struct Region<'a> {
    /// Everything up to and including the start marker
    pub prefix: &'a str,
    /// Text between the markers
    pub content: &'a str,
    /// The end marker and everything after it
    pub suffix: &'a str,
}

impl<'a> Region<'a> {
    /// Find the first `start` marker and the first `end` marker after it.
    pub fn locate(text: &'a str, start: &str, end: &str) -> Result<Self> {
        let start_at = text
            .find(start)
            .ok_or_else(|| Error::region_not_found(start))?;
        let content_at = start_at + start.len();
        let end_at = text[content_at..]
            .find(end)
            .map(|offset| content_at + offset)
            .ok_or_else(|| Error::region_not_found(end))?;

        Ok(Region {
            prefix: &text[..content_at],
            content: &text[content_at..end_at],
            suffix: &text[end_at..],
        })
    }

    /// Rebuild the document with `content` between the markers.
    pub fn replace(&self, content: &str) -> String {
        let mut out =
            String::with_capacity(self.prefix.len() + content.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(content);
        out.push_str(self.suffix);
        out
    }
}

/// Result of splicing both regions.
#[derive(Debug)]
pub struct Spliced {
    pub text: String,
    /// False when the sidebar markers were missing and the sidebar was left as is.
    pub sidebar_updated: bool,
}

/// Replace the body region with `body` and the sidebar region with `nav`.
///
/// A missing body marker fails the whole splice. Missing sidebar markers only
/// skip the sidebar update.
pub fn splice(document: &str, markers: &Markers, body: &str, nav: &str) -> Result<Spliced> {
    let body_region = Region::locate(document, &markers.body_start, &markers.body_end)?;
    debug!(
        "replacing {} bytes of reference body with {}",
        body_region.content.len(),
        body.len()
    );
    let text = body_region.replace(&format!("\n{}", body));

    let sidebar = match Region::locate(&text, &markers.sidebar_start, &markers.sidebar_end) {
        Ok(region) => Some(region.replace(&format!("\n{}", nav))),
        Err(err) => {
            warn!("skipping sidebar update: {}", err);
            None
        }
    };

    Ok(match sidebar {
        Some(updated) => Spliced {
            text: updated,
            sidebar_updated: true,
        },
        None => Spliced {
            text,
            sidebar_updated: false,
        },
    })
}
