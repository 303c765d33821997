//! Data model for a decoded API description and the records derived from it.
//!
//! Optional fields are defaulted here, at the parse boundary, so later stages
//! never re-check the shape of the source document.

use indexmap::IndexMap;
use log::debug;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Tag assigned to operations that declare none.
pub const DEFAULT_TAG: &str = "Other";

/// HTTP method keys a path item may carry that are never documented.
const UNDOCUMENTED_METHOD_KEYS: &[&str] = &["options", "head", "trace"];

/// Complete API description as fetched. Never mutated after decoding.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceDocument {
    pub info: Info,
    pub servers: Vec<Server>,
    pub tags: Vec<TagDecl>,
    /// Path template → operations, in declaration order
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
    /// Swagger 2 shared parameters (`#/parameters/...`)
    pub parameters: IndexMap<String, Parameter>,
    /// Swagger 2 `host`
    pub host: Option<String>,
    /// Swagger 2 `basePath`
    #[serde(rename = "basePath")]
    pub base_path: Option<String>,
    /// Swagger 2 `schemes`
    pub schemes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
    pub variables: IndexMap<String, ServerVariable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerVariable {
    pub default: String,
}

/// Entry of the top-level `tags` array.
#[derive(Debug, Deserialize)]
pub struct TagDecl {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    pub parameters: IndexMap<String, Parameter>,
}

/// Operations declared under one path template.
///
/// Only GET, POST, PUT, DELETE and PATCH are decoded. OPTIONS, HEAD and TRACE
/// are skipped before their bodies are looked at, as are the non-method keys
/// (`parameters`, `summary`, `servers`, `$ref`, `x-*` extensions).
#[derive(Debug, Default)]
pub struct PathItem {
    pub operations: Vec<(Method, Operation)>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut operations = Vec::new();
        for (key, value) in raw {
            let Some(method) = Method::parse(&key) else {
                if UNDOCUMENTED_METHOD_KEYS
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case(&key))
                {
                    debug!("skipping {} operation", key.to_uppercase());
                }
                continue;
            };
            let operation = Operation::deserialize(value).map_err(|e| {
                <D::Error as de::Error>::custom(format!("operation `{}`: {}", key, e))
            })?;
            operations.push((method, operation));
        }
        Ok(PathItem { operations })
    }
}

/// One method + path combination.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Empty when the operation declares no tags
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub parameters: Vec<ParameterEntry>,
    /// Status code → response, in declaration order
    #[serde(deserialize_with = "nullable")]
    pub responses: IndexMap<String, Response>,
    pub deprecated: bool,
}

/// A parameter declared inline or by reference to a shared definition.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ParameterEntry {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(Parameter),
}

#[derive(Debug, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// query, path, header or cookie
    #[serde(rename = "in", default)]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub schema: Option<Schema>,
    /// Swagger 2 declares the type on the parameter itself
    #[serde(rename = "type", default)]
    pub legacy_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

impl Parameter {
    /// Declared type name, `"string"` when the document gives none.
    pub fn type_name(&self) -> &str {
        let from_schema = self.schema.as_ref().and_then(|s| match &s.kind {
            Some(SchemaType::Single(t)) => Some(t.as_str()),
            Some(SchemaType::Union(types)) => {
                types.iter().map(String::as_str).find(|t| *t != "null")
            }
            None => None,
        });
        from_schema
            .or(self.legacy_type.as_deref())
            .unwrap_or("string")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: Option<SchemaType>,
}

/// `type` is a string, or an array of strings in OpenAPI 3.1.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

impl SourceDocument {
    /// Base URL for example requests, if the document declares one.
    ///
    /// The first server wins, with `{var}` placeholders replaced by their
    /// declared defaults. Swagger 2 documents fall back to `host` + `basePath`.
    pub fn base_url(&self) -> Option<String> {
        if let Some(server) = self.servers.first() {
            let mut url = server.url.clone();
            for (name, var) in &server.variables {
                url = url.replace(&format!("{{{}}}", name), &var.default);
            }
            return Some(url.trim_end_matches('/').to_string());
        }
        let host = self.host.as_deref()?;
        let scheme = self.schemes.first().map(String::as_str).unwrap_or("https");
        let base_path = self.base_path.as_deref().unwrap_or("");
        Some(
            format!("{}://{}{}", scheme, host, base_path)
                .trim_end_matches('/')
                .to_string(),
        )
    }

    /// Resolve a `$ref` to a shared parameter definition.
    pub fn resolve_parameter(&self, reference: &str) -> Option<&Parameter> {
        if let Some(name) = reference.strip_prefix("#/components/parameters/") {
            return self.components.parameters.get(name);
        }
        reference
            .strip_prefix("#/parameters/")
            .and_then(|name| self.parameters.get(name))
    }
}

/// Treat an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// -- derived records --

/// HTTP methods rendered into the reference. Everything else is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Case-insensitive; `None` for methods that are not documented.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "PATCH" => Some(Method::Patch),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// Lower-case name used in CSS class names.
    pub fn css_name(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
        }
    }

    /// Whether example requests carry a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (operation, tag) pair. An operation with N tags yields N endpoints.
#[derive(Debug)]
pub struct Endpoint<'a> {
    pub method: Method,
    pub path: &'a str,
    pub operation: &'a Operation,
    /// Inline and resolved shared parameters, in declaration order
    pub parameters: Vec<&'a Parameter>,
    pub tag: &'a str,
    /// Lower-cased text used for client-side filtering
    pub search_index: String,
}

/// Endpoints sharing a tag, in output order.
#[derive(Debug)]
pub struct TagGroup<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub endpoints: Vec<Endpoint<'a>>,
}
