//! Pipelines, deals, deal attachments and deal custom fields.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Pipelines
        ToolEntry::new(
            "listPipelines",
            "List all pipelines",
            RouteBinding::list_all("/pipelines", "pipelines"),
        ),
        ToolEntry::new("createPipeline", "Create a pipeline", RouteBinding::create("/pipelines"))
            .string("name", "Pipeline name")
            .required(),
        ToolEntry::new("getPipeline", "Get a pipeline by ID", RouteBinding::get("/pipelines/{id}"))
            .number("id", "Pipeline ID")
            .required(),
        ToolEntry::new(
            "updatePipeline",
            "Update a pipeline",
            RouteBinding::update("/pipelines/{id}"),
        )
        .number("id", "Pipeline ID")
        .required()
        .string("name", "Name")
        .required(),
        ToolEntry::new(
            "deletePipeline",
            "Delete a pipeline",
            RouteBinding::delete("/pipelines/{id}", "Pipeline {id} deleted"),
        )
        .number("id", "Pipeline ID")
        .required(),
        // Deals
        ToolEntry::new("listDeals", "List deals with filtering", RouteBinding::list("/deals", "deals"))
            .paginated()
            .next_cursor()
            .sort()
            .fields()
            .string("id", "Comma-separated deal IDs")
            .number("pipelineId", "Filter by pipeline")
            .string("stage", "Filter by stage")
            .number("assignedUserId", "Filter by assigned user")
            .string("assignedTo", "Filter by assigned name"),
        ToolEntry::new("createDeal", "Create a deal", RouteBinding::create("/deals"))
            .number("pipelineId", "Pipeline ID")
            .number("stageId", "Stage ID")
            .number("personId", "Person ID")
            .array("userIds", ItemType::Number, "Assigned user IDs")
            .string("name", "Deal name")
            .number("value", "Deal value")
            .string("closingDate", "Closing date ISO")
            .number("orderWeight", "Sort order weight"),
        ToolEntry::new("getDeal", "Get a deal by ID", RouteBinding::get("/deals/{id}"))
            .number("id", "Deal ID")
            .required(),
        ToolEntry::new("updateDeal", "Update a deal", RouteBinding::update("/deals/{id}"))
            .number("id", "Deal ID")
            .required()
            .string("name", "Name")
            .number("pipelineId", "Pipeline ID")
            .number("stageId", "Stage ID")
            .number("personId", "Person ID")
            .array("userIds", ItemType::Number, "User IDs")
            .number("value", "Value")
            .string("description", "Description"),
        ToolEntry::new(
            "deleteDeal",
            "Delete a deal",
            RouteBinding::delete("/deals/{id}", "Deal {id} deleted"),
        )
        .number("id", "Deal ID")
        .required(),
        // Deal attachments
        ToolEntry::new(
            "createDealAttachment",
            "Attach a file to a deal",
            RouteBinding::create("/dealAttachments"),
        )
        .number("dealId", "Deal ID")
        .required()
        .string("uri", "File URI")
        .required()
        .string("fileName", "File name")
        .required()
        .number("fileSize", "File size"),
        ToolEntry::new(
            "getDealAttachment",
            "Get a deal attachment by ID",
            RouteBinding::get("/dealAttachments/{id}"),
        )
        .number("id", "Attachment ID")
        .required(),
        ToolEntry::new(
            "updateDealAttachment",
            "Update a deal attachment",
            RouteBinding::update("/dealAttachments/{id}"),
        )
        .number("id", "Attachment ID")
        .required()
        .number("dealId", "Deal ID")
        .required()
        .string("uri", "URI")
        .required()
        .string("fileName", "File name")
        .required()
        .number("fileSize", "Size"),
        ToolEntry::new(
            "deleteDealAttachment",
            "Delete a deal attachment",
            RouteBinding::delete("/dealAttachments/{id}", "Deal attachment {id} deleted"),
        )
        .number("id", "Attachment ID")
        .required(),
        // Deal custom fields
        ToolEntry::new(
            "listDealCustomFields",
            "List deal custom fields",
            RouteBinding::list_all("/dealCustomFields", "dealCustomFields"),
        ),
        ToolEntry::new(
            "createDealCustomField",
            "Create a deal custom field",
            RouteBinding::create("/dealCustomFields"),
        )
        .string("name", "Field name")
        .required()
        .string("type", "Field type")
        .required()
        .array("options", ItemType::String, "Dropdown options"),
        ToolEntry::new(
            "getDealCustomField",
            "Get a deal custom field by ID",
            RouteBinding::get("/dealCustomFields/{id}"),
        )
        .number("id", "Field ID")
        .required(),
        ToolEntry::new(
            "updateDealCustomField",
            "Update a deal custom field",
            RouteBinding::update("/dealCustomFields/{id}"),
        )
        .number("id", "Field ID")
        .required()
        .string("name", "Name")
        .string("type", "Type")
        .array("options", ItemType::String, "Options"),
        ToolEntry::new(
            "deleteDealCustomField",
            "Delete a deal custom field",
            RouteBinding::delete("/dealCustomFields/{id}", "Deal custom field {id} deleted"),
        )
        .number("id", "Field ID")
        .required(),
    ]
}
