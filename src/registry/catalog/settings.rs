//! Custom fields and stages.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Custom fields
        ToolEntry::new(
            "listCustomFields",
            "List all custom fields",
            RouteBinding::list_all("/customFields", "customFields"),
        ),
        ToolEntry::new(
            "createCustomField",
            "Create a custom field",
            RouteBinding::create("/customFields"),
        )
        .string("name", "Field name")
        .required()
        .string("type", "Field type (text, number, dropdown, etc)")
        .required()
        .array("options", ItemType::String, "Options for dropdown fields"),
        ToolEntry::new(
            "getCustomField",
            "Get a custom field by ID",
            RouteBinding::get("/customFields/{id}"),
        )
        .number("id", "Custom field ID")
        .required(),
        ToolEntry::new(
            "updateCustomField",
            "Update a custom field",
            RouteBinding::update("/customFields/{id}"),
        )
        .number("id", "Custom field ID")
        .required()
        .string("name", "Name")
        .string("type", "Type")
        .array("options", ItemType::String, "Options"),
        ToolEntry::new(
            "deleteCustomField",
            "Delete a custom field",
            RouteBinding::delete("/customFields/{id}", "Custom field {id} deleted"),
        )
        .number("id", "Custom field ID")
        .required(),
        // Stages
        ToolEntry::new(
            "listStages",
            "List all pipeline stages",
            RouteBinding::list_all("/stages", "stages"),
        ),
        ToolEntry::new("createStage", "Create a pipeline stage", RouteBinding::create("/stages"))
            .string("name", "Stage name")
            .required()
            .number("pipelineId", "Pipeline ID"),
        ToolEntry::new("getStage", "Get a stage by ID", RouteBinding::get("/stages/{id}"))
            .number("id", "Stage ID")
            .required(),
        ToolEntry::new("updateStage", "Update a stage", RouteBinding::update("/stages/{id}"))
            .number("id", "Stage ID")
            .required()
            .string("name", "Stage name")
            .required(),
        ToolEntry::new(
            "deleteStage",
            "Delete a stage",
            RouteBinding::delete("/stages/{id}", "Stage {id} deleted"),
        )
        .number("id", "Stage ID")
        .required(),
    ]
}
