//! Flattens the path → method → operation tree into tagged endpoint records.

use crate::model::*;
use log::warn;

/// Produce one [`Endpoint`] per (operation, tag) pair.
///
/// Order follows path declaration, then method declaration, then the
/// operation's tag list. OPTIONS, HEAD and TRACE were already dropped while
/// decoding the path items.
pub fn normalize(doc: &SourceDocument) -> Vec<Endpoint<'_>> {
    let mut endpoints = Vec::new();

    for (path, item) in &doc.paths {
        for &(method, ref operation) in &item.operations {
            let parameters = resolve_parameters(doc, operation);
            let search_index = search_index(method, path, operation, &parameters);

            let tags: Vec<&str> = if operation.tags.is_empty() {
                vec![DEFAULT_TAG]
            } else {
                operation.tags.iter().map(String::as_str).collect()
            };

            for tag in tags {
                endpoints.push(Endpoint {
                    method,
                    path,
                    operation,
                    parameters: parameters.clone(),
                    tag,
                    search_index: search_index.clone(),
                });
            }
        }
    }

    endpoints
}

fn resolve_parameters<'a>(
    doc: &'a SourceDocument,
    operation: &'a Operation,
) -> Vec<&'a Parameter> {
    operation
        .parameters
        .iter()
        .filter_map(|entry| match entry {
            ParameterEntry::Inline(parameter) => Some(parameter),
            ParameterEntry::Reference { reference } => {
                let resolved = doc.resolve_parameter(reference);
                if resolved.is_none() {
                    warn!("unresolved parameter reference: {}", reference);
                }
                resolved
            }
        })
        .collect()
}

/// Lower-cased, whitespace-collapsed text that client-side filtering matches against.
pub fn search_index(
    method: Method,
    path: &str,
    operation: &Operation,
    parameters: &[&Parameter],
) -> String {
    let path = path.replace(|c: char| matches!(c, '{' | '}' | '/' | '-'), " ");
    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    let text = format!(
        "{} {} {} {} {}",
        method.as_str(),
        path,
        operation.summary,
        operation.description,
        names.join(" ")
    );
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
