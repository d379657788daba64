//! Tool schema registry.
//!
//! The registry is the static catalog of every tool the server exposes. Each
//! [`ToolEntry`] pairs the advertised [`ToolDescriptor`] with the
//! [`RouteBinding`] the dispatcher uses to turn a call into an HTTP request.
//! The registry itself performs no I/O.

mod catalog;
pub mod route;
pub mod schema;

pub use route::{PathTemplate, Remainder, ResponseShape, RouteBinding};
pub use schema::{ItemType, ParamSpec, ParamType, ToolDescriptor};

use crate::error::RegistryError;
use std::collections::{HashMap, HashSet};

/// A tool's schema together with its routing rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEntry {
    pub descriptor: ToolDescriptor,
    pub route: RouteBinding,
}

impl ToolEntry {
    pub fn new(name: &'static str, description: &'static str, route: RouteBinding) -> Self {
        Self {
            descriptor: ToolDescriptor::new(name, description),
            route,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Declare an optional parameter.
    pub fn param(mut self, name: &'static str, kind: ParamType, description: &'static str) -> Self {
        self.descriptor.params.push(ParamSpec {
            name,
            kind,
            description,
            required: false,
        });
        self
    }

    pub fn string(self, name: &'static str, description: &'static str) -> Self {
        self.param(name, ParamType::String, description)
    }

    pub fn number(self, name: &'static str, description: &'static str) -> Self {
        self.param(name, ParamType::Number, description)
    }

    pub fn boolean(self, name: &'static str, description: &'static str) -> Self {
        self.param(name, ParamType::Boolean, description)
    }

    pub fn object(self, name: &'static str, description: &'static str) -> Self {
        self.param(name, ParamType::Object, description)
    }

    pub fn array(self, name: &'static str, items: ItemType, description: &'static str) -> Self {
        self.param(name, ParamType::Array(items), description)
    }

    /// Mark the most recently declared parameter as required.
    pub fn required(mut self) -> Self {
        if let Some(last) = self.descriptor.params.last_mut() {
            last.required = true;
        }
        self
    }

    pub fn limit(self) -> Self {
        self.number("limit", "Maximum number of results to return")
    }

    pub fn offset(self) -> Self {
        self.number("offset", "Offset for pagination")
    }

    /// `limit` + `offset`.
    pub fn paginated(self) -> Self {
        self.limit().offset()
    }

    pub fn next_cursor(self) -> Self {
        self.string("next", "Cursor for next page of results")
    }

    pub fn sort(self) -> Self {
        self.string("sort", "Sort order")
    }

    pub fn fields(self) -> Self {
        self.string("fields", "Comma-separated list of fields to return")
    }
}

/// The catalog of tools, in publication order, with lookup by name.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// The built-in Follow Up Boss catalog.
    pub fn builtin() -> Self {
        Self::from_entries(catalog::entries())
    }

    /// Build a registry from arbitrary entries.
    ///
    /// Lookup resolves to the first entry with a given name; call
    /// [`ToolRegistry::validate`] to reject duplicates.
    pub fn from_entries(entries: Vec<ToolEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.name()).or_insert(position);
        }
        Self { entries, index }
    }

    /// Check the catalog's structural invariants.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.name()) {
                return Err(RegistryError::DuplicateName(entry.name().to_string()));
            }
            if let Some(param) = entry
                .route
                .bound_params()
                .find(|p| !entry.descriptor.has_param(p))
            {
                return Err(RegistryError::UndeclaredRouteParam {
                    tool: entry.name().to_string(),
                    param: param.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    /// Descriptors in publication order.
    pub fn list_tools(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
