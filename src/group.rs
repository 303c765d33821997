//! Partition endpoints into tag groups.

use crate::model::{Endpoint, TagDecl, TagGroup};
use indexmap::IndexMap;

/// Group endpoints by tag.
///
/// Groups follow the declared tag order; tags only seen on endpoints are
/// appended in first-seen order. Groups left without endpoints are dropped.
pub fn group<'a>(declared: &'a [TagDecl], endpoints: Vec<Endpoint<'a>>) -> Vec<TagGroup<'a>> {
    let mut groups: IndexMap<&'a str, Vec<Endpoint<'a>>> = IndexMap::new();
    for tag in declared {
        groups.entry(tag.name.as_str()).or_default();
    }
    for endpoint in endpoints {
        groups.entry(endpoint.tag).or_default().push(endpoint);
    }

    groups
        .into_iter()
        .filter(|(_, endpoints)| !endpoints.is_empty())
        .map(|(name, endpoints)| TagGroup {
            name,
            description: declared
                .iter()
                .find(|t| t.name == name)
                .and_then(|t| t.description.as_deref())
                .filter(|d| !d.trim().is_empty()),
            endpoints,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceDocument;
    use crate::normalize::normalize;

    fn decode(json: &str) -> SourceDocument {
        serde_json::from_str(json).unwrap()
    }

    fn names<'a>(groups: &'a [TagGroup<'_>]) -> Vec<&'a str> {
        groups.iter().map(|g| g.name).collect()
    }

    #[test]
    fn declared_order_wins_over_path_order() {
        let doc = decode(
            r#"{
                "tags": [{"name": "B"}, {"name": "A"}],
                "paths": {"/a": {"get": {"tags": ["A"]}}, "/b": {"get": {"tags": ["B"]}}}
            }"#,
        );
        let groups = group(&doc.tags, normalize(&doc));
        assert_eq!(names(&groups), ["B", "A"]);
    }

    #[test]
    fn undeclared_tags_are_appended_first_seen() {
        let doc = decode(
            r#"{
                "tags": [{"name": "Pets"}],
                "paths": {
                    "/health": {"get": {}},
                    "/users": {"get": {"tags": ["Users"]}},
                    "/pets": {"get": {"tags": ["Pets"]}}
                }
            }"#,
        );
        let groups = group(&doc.tags, normalize(&doc));
        assert_eq!(names(&groups), ["Pets", "Other", "Users"]);
    }

    #[test]
    fn empty_declared_tags_are_dropped() {
        let doc = decode(
            r#"{
                "tags": [{"name": "Unused", "description": "nothing here"}, {"name": "Pets"}],
                "paths": {"/pets": {"get": {"tags": ["Pets"]}, "post": {"tags": ["Pets"]}}}
            }"#,
        );
        let groups = group(&doc.tags, normalize(&doc));
        assert_eq!(names(&groups), ["Pets"]);
        assert_eq!(groups[0].endpoints.len(), 2);
    }

    #[test]
    fn multi_tag_operation_lands_in_each_group() {
        let doc = decode(r#"{"paths": {"/a": {"get": {"tags": ["X", "Y"]}}}}"#);
        let groups = group(&doc.tags, normalize(&doc));
        assert_eq!(names(&groups), ["X", "Y"]);
        assert!(groups.iter().all(|g| g.endpoints.len() == 1));
    }

    #[test]
    fn carries_declared_description() {
        let doc = decode(
            r#"{
                "tags": [{"name": "Pets", "description": "Everything about pets"}],
                "paths": {"/pets": {"get": {"tags": ["Pets"]}}}
            }"#,
        );
        let groups = group(&doc.tags, normalize(&doc));
        assert_eq!(groups[0].description, Some("Everything about pets"));
    }

    #[test]
    fn no_endpoints_no_groups() {
        let doc = decode(r#"{"tags": [{"name": "Pets"}], "paths": {}}"#);
        assert!(group(&doc.tags, normalize(&doc)).is_empty());
    }
}
