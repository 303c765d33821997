//! API reference body — tag sections made of endpoint cards.

use crate::model::*;
use crate::render::{anchor_id, html_escape, Renderer};
use indexmap::IndexMap;

pub struct ReferenceRenderer {
    base_url: String,
}

impl ReferenceRenderer {
    /// `base_url` prefixes the path template in example requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Renderer for ReferenceRenderer {
    fn render(&self, groups: &[TagGroup<'_>]) -> String {
        groups
            .iter()
            .map(|group| render_tag_section(group, &self.base_url))
            .collect()
    }
}

/// One tag section: header with count, optional description, then its cards.
pub fn render_tag_section(group: &TagGroup<'_>, base_url: &str) -> String {
    let mut out = String::new();
    let count = group.endpoints.len();
    let noun = if count == 1 { "endpoint" } else { "endpoints" };

    out.push_str(&format!(
        "<div class=\"tag-section\" id=\"{}\">\n",
        html_escape(&anchor_id(group.name))
    ));
    out.push_str("<div class=\"tag-header\">\n");
    out.push_str(&format!(
        "<h2 class=\"tag-title\">{}</h2>\n",
        html_escape(group.name)
    ));
    out.push_str(&format!(
        "<span class=\"tag-count\">{} {}</span>\n",
        count, noun
    ));
    out.push_str("</div>\n");

    if let Some(desc) = group.description {
        out.push_str(&format!(
            "<p class=\"tag-description\">{}</p>\n",
            html_escape(desc)
        ));
    }

    for endpoint in &group.endpoints {
        out.push_str(&render_endpoint(endpoint, base_url));
    }

    out.push_str("</div>\n");
    out
}

/// One endpoint card. The search index is embedded for client-side filtering.
pub fn render_endpoint(endpoint: &Endpoint<'_>, base_url: &str) -> String {
    let op = endpoint.operation;
    let mut out = String::new();

    let class = if op.deprecated {
        "endpoint deprecated"
    } else {
        "endpoint"
    };
    out.push_str(&format!(
        "<div class=\"{}\" data-search=\"{}\">\n",
        class,
        html_escape(&endpoint.search_index)
    ));

    // Header
    out.push_str("<div class=\"endpoint-header\">\n");
    out.push_str(&format!(
        "<span class=\"method method-{}\">{}</span>\n",
        endpoint.method.css_name(),
        endpoint.method
    ));
    out.push_str(&format!(
        "<code class=\"endpoint-path\">{}</code>\n",
        html_escape(endpoint.path)
    ));
    if !op.summary.is_empty() {
        out.push_str(&format!(
            "<span class=\"endpoint-summary\">{}</span>\n",
            html_escape(&op.summary)
        ));
    }
    if op.deprecated {
        out.push_str("<span class=\"deprecated-badge\">deprecated</span>\n");
    }
    out.push_str("</div>\n");

    // Body
    out.push_str("<div class=\"endpoint-body\">\n");
    if !op.description.is_empty() {
        out.push_str(&format!(
            "<p class=\"endpoint-description\">{}</p>\n",
            html_escape(&op.description)
        ));
    }
    out.push_str(&render_parameters(&endpoint.parameters));
    out.push_str(&render_responses(&op.responses));
    out.push_str(&format!(
        "<pre class=\"example\"><code>{}</code></pre>\n",
        html_escape(&example_request(endpoint.method, base_url, endpoint.path))
    ));
    out.push_str("</div>\n");

    out.push_str("</div>\n");
    out
}

/// Parameter table; empty when there are no parameters.
pub fn render_parameters(parameters: &[&Parameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("<table class=\"params\">\n");
    out.push_str("<thead><tr><th>Name</th><th>In</th><th>Type</th><th>Required</th><th>Description</th></tr></thead>\n");
    out.push_str("<tbody>\n");
    for param in parameters {
        let required = if param.required {
            "<span class=\"param-required\">required</span>"
        } else {
            "<span class=\"param-optional\">optional</span>"
        };
        out.push_str(&format!(
            "<tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape(&param.name),
            html_escape(&param.location),
            html_escape(param.type_name()),
            required,
            html_escape(&param.description)
        ));
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// One badge per declared status code; empty when none are declared.
pub fn render_responses(responses: &IndexMap<String, Response>) -> String {
    if responses.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class=\"responses\">\n");
    for (code, response) in responses {
        out.push_str(&format!(
            "<span class=\"status {}\" title=\"{}\">{}</span>\n",
            status_class(code),
            html_escape(&response.description),
            html_escape(code)
        ));
    }
    out.push_str("</div>\n");
    out
}

/// 4xx is a client error, 5xx and above a server error, anything else
/// (including `default` and `2XX`-style ranges) counts as success.
pub fn status_class(code: &str) -> &'static str {
    match code.trim().parse::<u32>() {
        Ok(400..=499) => "status-client-error",
        Ok(n) if n >= 500 => "status-server-error",
        _ => "status-success",
    }
}

/// Command-line example for an endpoint. Path placeholders are left as written.
pub fn example_request(method: Method, base_url: &str, path: &str) -> String {
    let mut cmd = format!(
        "curl -X {} \"{}{}\" -H \"Authorization: Bearer YOUR_TOKEN\"",
        method,
        base_url.trim_end_matches('/'),
        path
    );
    if method.has_body() {
        cmd.push_str(" -H \"Content-Type: application/json\" -d '{}'");
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group;
    use crate::normalize::normalize;

    const ITEMS: &str = r#"{
        "servers": [{"url": "https://x.test"}],
        "paths": {"/items/{id}": {"get": {
            "tags": ["Items"],
            "summary": "Get an item",
            "parameters": [{"name": "q", "in": "query", "required": true}],
            "responses": {"200": {"description": "OK"}, "404": {"description": "Missing"}}
        }}}
    }"#;

    fn decode(json: &str) -> SourceDocument {
        serde_json::from_str(json).unwrap()
    }

    fn render_doc(doc: &SourceDocument) -> String {
        let groups = group(&doc.tags, normalize(doc));
        ReferenceRenderer::new(doc.base_url().unwrap_or_default()).render(&groups)
    }

    #[test]
    fn example_get_has_no_body() {
        assert_eq!(
            example_request(Method::Get, "https://x.test", "/items/{id}"),
            r#"curl -X GET "https://x.test/items/{id}" -H "Authorization: Bearer YOUR_TOKEN""#
        );
        assert!(!example_request(Method::Delete, "https://x.test", "/a").contains("-d"));
    }

    #[test]
    fn example_with_body_methods() {
        for method in [Method::Post, Method::Put, Method::Patch] {
            let cmd = example_request(method, "https://x.test/", "/items");
            assert!(cmd.starts_with(&format!("curl -X {} \"https://x.test/items\"", method)));
            assert!(cmd.ends_with(r#"-H "Content-Type: application/json" -d '{}'"#));
        }
    }

    #[test]
    fn status_classes() {
        assert_eq!(status_class("200"), "status-success");
        assert_eq!(status_class("302"), "status-success");
        assert_eq!(status_class("400"), "status-client-error");
        assert_eq!(status_class("499"), "status-client-error");
        assert_eq!(status_class("500"), "status-server-error");
        assert_eq!(status_class("599"), "status-server-error");
        assert_eq!(status_class("default"), "status-success");
        assert_eq!(status_class("4XX"), "status-success");
    }

    #[test]
    fn empty_parameters_render_nothing() {
        assert_eq!(render_parameters(&[]), "");
    }

    #[test]
    fn empty_responses_render_nothing() {
        assert_eq!(render_responses(&IndexMap::new()), "");
    }

    #[test]
    fn items_scenario() {
        let doc = decode(ITEMS);
        let html = render_doc(&doc);

        assert_eq!(html.matches("class=\"tag-section\"").count(), 1);
        assert!(html.contains("<div class=\"tag-section\" id=\"items\">"));
        assert!(html.contains("<h2 class=\"tag-title\">Items</h2>"));
        assert!(html.contains("<span class=\"tag-count\">1 endpoint</span>"));
        assert!(html.contains("<span class=\"method method-get\">GET</span>"));
        assert!(html.contains("<code class=\"endpoint-path\">/items/{id}</code>"));
        assert!(html.contains(
            "<tr><td><code>q</code></td><td>query</td><td>string</td><td><span class=\"param-required\">required</span></td><td></td></tr>"
        ));
        assert!(html.contains("<span class=\"status status-success\" title=\"OK\">200</span>"));
        assert!(html.contains("<span class=\"status status-client-error\" title=\"Missing\">404</span>"));
        assert!(html.contains(
            "curl -X GET &quot;https://x.test/items/{id}&quot; -H &quot;Authorization: Bearer YOUR_TOKEN&quot;</code>"
        ));
        assert!(!html.contains("Content-Type"));
        assert!(html.contains("data-search=\"get items id get an item q\""));
    }

    #[test]
    fn plural_count() {
        let doc = decode(
            r#"{"paths": {"/a": {"get": {"tags": ["A"]}, "post": {"tags": ["A"]}}}}"#,
        );
        assert!(render_doc(&doc).contains("<span class=\"tag-count\">2 endpoints</span>"));
    }

    #[test]
    fn untrusted_text_is_escaped() {
        let doc = decode(
            r#"{"tags": [{"name": "<b>Tag</b>", "description": "\"quoted\""}],
                "paths": {"/a": {"get": {
                "tags": ["<b>Tag</b>"],
                "summary": "<script>alert(1)</script>",
                "description": "say \"hi\"",
                "parameters": [{"name": "<x>", "in": "query", "description": "a > b"}],
                "responses": {"200": {"description": "<ok>"}}
            }}}}"#,
        );
        let html = render_doc(&doc);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<x>"));
        assert!(!html.contains("<ok>"));
        assert!(!html.contains("\"hi\""));
        assert!(!html.contains("\"quoted\""));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("say &quot;hi&quot;"));
        assert!(html.contains("a &gt; b"));
    }

    #[test]
    fn deprecated_operations_are_flagged() {
        let doc = decode(r#"{"paths": {"/old": {"get": {"deprecated": true}}}}"#);
        let html = render_doc(&doc);
        assert!(html.contains("<div class=\"endpoint deprecated\""));
        assert!(html.contains("<span class=\"deprecated-badge\">deprecated</span>"));
    }

    #[test]
    fn sections_follow_group_order() {
        let doc = decode(
            r#"{"tags": [{"name": "B"}, {"name": "A"}],
                "paths": {"/a": {"get": {"tags": ["A"]}}, "/b": {"get": {"tags": ["B"]}}}}"#,
        );
        let html = render_doc(&doc);
        let b = html.find("id=\"b\"").unwrap();
        let a = html.find("id=\"a\"").unwrap();
        assert!(b < a);
    }

    #[test]
    fn no_groups_no_markup() {
        assert_eq!(ReferenceRenderer::new("https://x.test").render(&[]), "");
    }
}
