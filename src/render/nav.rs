//! Sidebar navigation — one link per tag section.

use crate::model::{Method, TagGroup};
use crate::render::{anchor_id, html_escape, Renderer};

pub struct NavRenderer;

impl Renderer for NavRenderer {
    fn render(&self, groups: &[TagGroup<'_>]) -> String {
        groups.iter().map(render_nav_link).collect()
    }
}

/// Badge shown next to a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBadge {
    /// Every endpoint in the group uses this method.
    Method(Method),
    Mixed,
}

impl NavBadge {
    pub fn for_group(group: &TagGroup<'_>) -> Self {
        let mut methods = group.endpoints.iter().map(|e| e.method);
        match methods.next() {
            Some(first) if methods.all(|m| m == first) => NavBadge::Method(first),
            _ => NavBadge::Mixed,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavBadge::Method(method) => method.css_name(),
            NavBadge::Mixed => "mixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavBadge::Method(method) => method.as_str(),
            NavBadge::Mixed => "MIXED",
        }
    }
}

pub fn render_nav_link(group: &TagGroup<'_>) -> String {
    let badge = NavBadge::for_group(group);
    format!(
        "<a class=\"nav-link\" href=\"#{}\"><span class=\"nav-badge badge-{}\">{}</span><span class=\"nav-label\">{}</span><span class=\"nav-count\">{}</span></a>\n",
        html_escape(&anchor_id(group.name)),
        badge.class(),
        badge.label(),
        html_escape(group.name),
        group.endpoints.len()
    )
}
