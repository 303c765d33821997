//! Renderer module — markup for the two regions of the reference page.

pub mod nav;
pub mod reference;

use crate::model::TagGroup;
use std::collections::HashSet;

/// Renders grouped endpoints into a markup fragment.
pub trait Renderer {
    fn render(&self, groups: &[TagGroup<'_>]) -> String;
}

/// Escape text taken from the API description before embedding it in markup.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Anchor id for a tag section: lower-cased, whitespace runs become single hyphens.
pub fn anchor_id(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Tag names whose anchor is empty or already taken by an earlier group.
///
/// Such sections still render, but their sidebar link cannot reach them.
pub fn unreachable_anchors<'a>(groups: &[TagGroup<'a>]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .filter(|group| {
            let id = anchor_id(group.name);
            id.is_empty() || !seen.insert(id)
        })
        .map(|group| group.name)
        .collect()
}
