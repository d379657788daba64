//! The built-in Follow Up Boss tool catalog, grouped by resource.
//!
//! Groups are concatenated in publication order; `tools/list` returns the
//! tools in exactly this order.

mod communications;
mod contacts;
mod deals;
mod inbox;
mod organization;
mod scheduling;
mod settings;
mod templates;
mod workflow;

use super::{ItemType, RouteBinding, ToolEntry};

pub(super) fn entries() -> Vec<ToolEntry> {
    [
        contacts::entries(),
        communications::entries(),
        workflow::entries(),
        templates::entries(),
        settings::entries(),
        scheduling::entries(),
        deals::entries(),
        organization::entries(),
        inbox::entries(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ResponseShape;

    #[test]
    fn test_catalog_size() {
        assert_eq!(entries().len(), 152);
    }

    #[test]
    fn test_every_id_route_requires_its_placeholders() {
        for entry in entries() {
            for placeholder in entry.route.path.placeholders() {
                let required: Vec<_> = entry.descriptor.required_params().collect();
                assert!(
                    required.contains(placeholder),
                    "{} does not require '{}'",
                    entry.name(),
                    placeholder
                );
            }
        }
    }

    #[test]
    fn test_list_tools_are_collection_shaped() {
        for entry in entries() {
            if entry.name().starts_with("list") && entry.name() != "listInboxAppInstallations" {
                assert!(
                    matches!(entry.route.response, ResponseShape::Collection(_)),
                    "{} is not collection shaped",
                    entry.name()
                );
            }
        }
    }

    #[test]
    fn test_delete_named_tools_use_delete() {
        for entry in entries() {
            if entry.name().starts_with("delete") {
                assert!(entry.route.is_destructive(), "{}", entry.name());
            }
        }
    }
}
