//! Route bindings: how a tool's arguments become one HTTP request.
//!
//! Every tool in the catalog carries a [`RouteBinding`] next to its schema,
//! so the set of advertised tools and the set of routable tools are the same
//! set by construction.

use crate::models::HttpMethod;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("placeholder regex is valid"));

/// Substitute `{name}` placeholders in `template`.
///
/// Placeholders for which `lookup` returns `None` are left untouched.
pub fn render_template<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// A URL path with `{name}` placeholders, e.g. `/people/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    template: &'static str,
    placeholders: Vec<&'static str>,
}

impl PathTemplate {
    pub fn new(template: &'static str) -> Self {
        let placeholders = PLACEHOLDER_RE
            .captures_iter(template)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        Self {
            template,
            placeholders,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.template
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> &[&'static str] {
        &self.placeholders
    }

    /// Render the path; `lookup` must yield already-encoded segments.
    pub fn fill<F>(&self, lookup: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        if self.placeholders.is_empty() {
            return self.template.to_string();
        }
        render_template(self.template, lookup)
    }
}

/// Where arguments not consumed by the path or query flags go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    /// Forwarded as query-string parameters
    Query,
    /// Sent as the JSON request body
    Body,
    /// Dropped
    Discard,
}

/// How the remote response is turned into the tool result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Remote payload returned unchanged
    Passthrough,
    /// Keep only the named collection key and `_metadata`
    Collection(&'static str),
    /// Replace the payload with `{success: true, message}`; the message
    /// template may reference path parameters
    Acknowledge(&'static str),
}

/// Declarative mapping from a tool to its HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub method: HttpMethod,
    pub path: PathTemplate,
    /// Arguments lifted out of the remainder into the query string
    pub query_flags: Vec<&'static str>,
    pub remainder: Remainder,
    pub response: ResponseShape,
}

impl RouteBinding {
    fn new(
        method: HttpMethod,
        path: &'static str,
        remainder: Remainder,
        response: ResponseShape,
    ) -> Self {
        Self {
            method,
            path: PathTemplate::new(path),
            query_flags: Vec::new(),
            remainder,
            response,
        }
    }

    /// Paginated/filtered listing: GET, arguments as query, collection shaped.
    pub fn list(path: &'static str, key: &'static str) -> Self {
        Self::new(HttpMethod::Get, path, Remainder::Query, ResponseShape::Collection(key))
    }

    /// Unfiltered listing: GET, extra arguments dropped, collection shaped.
    pub fn list_all(path: &'static str, key: &'static str) -> Self {
        Self::new(HttpMethod::Get, path, Remainder::Discard, ResponseShape::Collection(key))
    }

    /// Single-resource read: GET, extra arguments dropped.
    pub fn get(path: &'static str) -> Self {
        Self::new(HttpMethod::Get, path, Remainder::Discard, ResponseShape::Passthrough)
    }

    /// POST with the remaining arguments as the body.
    pub fn create(path: &'static str) -> Self {
        Self::new(HttpMethod::Post, path, Remainder::Body, ResponseShape::Passthrough)
    }

    /// PUT with the remaining arguments as the body.
    pub fn update(path: &'static str) -> Self {
        Self::new(HttpMethod::Put, path, Remainder::Body, ResponseShape::Passthrough)
    }

    /// DELETE answered with a fixed acknowledgement.
    pub fn delete(path: &'static str, message: &'static str) -> Self {
        Self::new(
            HttpMethod::Delete,
            path,
            Remainder::Discard,
            ResponseShape::Acknowledge(message),
        )
    }

    /// Forward the remaining arguments as query parameters.
    pub fn forward_query(mut self) -> Self {
        self.remainder = Remainder::Query;
        self
    }

    /// Send the remaining arguments as a JSON body.
    pub fn send_body(mut self) -> Self {
        self.remainder = Remainder::Body;
        self
    }

    /// Lift `name` out of the body into the query string.
    pub fn query_flag(mut self, name: &'static str) -> Self {
        self.query_flags.push(name);
        self
    }

    /// Whether this route deletes remote data.
    pub fn is_destructive(&self) -> bool {
        self.method == HttpMethod::Delete
    }

    /// Argument names consumed by the route itself.
    pub fn bound_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.path
            .placeholders()
            .iter()
            .chain(self.query_flags.iter())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_extracted_in_order() {
        let path = PathTemplate::new("/reactions/{refType}/{refId}");
        assert_eq!(path.placeholders(), ["refType", "refId"]);
        assert!(PathTemplate::new("/people").placeholders().is_empty());
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        let path = PathTemplate::new("/reactions/{refType}/{refId}");
        let rendered = path.fill(|name| (name == "refType").then(|| "note".to_string()));
        assert_eq!(rendered, "/reactions/note/{refId}");
    }

    #[test]
    fn test_render_template_message() {
        let message = render_template("Person {id} deleted", |_| Some("42".to_string()));
        assert_eq!(message, "Person 42 deleted");
    }

    #[test]
    fn test_constructors() {
        let route = RouteBinding::update("/people/{id}").query_flag("mergeTags");
        assert_eq!(route.method, HttpMethod::Put);
        assert_eq!(route.remainder, Remainder::Body);
        assert_eq!(route.bound_params().collect::<Vec<_>>(), ["id", "mergeTags"]);

        let route = RouteBinding::delete("/inboxApps/participants", "Participant removed").send_body();
        assert!(route.is_destructive());
        assert_eq!(route.remainder, Remainder::Body);

        let route = RouteBinding::get("/people/{id}").forward_query();
        assert_eq!(route.remainder, Remainder::Query);
        assert_eq!(route.response, ResponseShape::Passthrough);
    }
}
