//! Email templates, text message templates and email marketing.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Email templates
        ToolEntry::new(
            "listTemplates",
            "List email templates",
            RouteBinding::list("/templates", "templates"),
        )
        .paginated()
        .next_cursor(),
        ToolEntry::new(
            "createTemplate",
            "Create an email template",
            RouteBinding::create("/templates"),
        )
        .string("name", "Template name")
        .required()
        .string("subject", "Email subject")
        .required()
        .string("body", "Email body HTML")
        .required(),
        ToolEntry::new(
            "getTemplate",
            "Get an email template by ID",
            RouteBinding::get("/templates/{id}"),
        )
        .number("id", "Template ID")
        .required(),
        ToolEntry::new(
            "updateTemplate",
            "Update an email template",
            RouteBinding::update("/templates/{id}"),
        )
        .number("id", "Template ID")
        .required()
        .string("name", "Name")
        .string("subject", "Subject")
        .string("body", "Body HTML"),
        ToolEntry::new(
            "mergeTemplate",
            "Merge an email template with a person's data (mail merge)",
            RouteBinding::create("/templates/merge"),
        )
        .number("templateId", "Template ID")
        .required()
        .number("personId", "Person ID")
        .required(),
        ToolEntry::new(
            "deleteTemplate",
            "Delete an email template",
            RouteBinding::delete("/templates/{id}", "Template {id} deleted"),
        )
        .number("id", "Template ID")
        .required(),
        // Text message templates
        ToolEntry::new(
            "listTextMessageTemplates",
            "List text message templates",
            RouteBinding::list("/textMessageTemplates", "textMessageTemplates"),
        )
        .paginated()
        .next_cursor(),
        ToolEntry::new(
            "createTextMessageTemplate",
            "Create a text message template",
            RouteBinding::create("/textMessageTemplates"),
        )
        .string("name", "Template name")
        .required()
        .string("body", "Message body")
        .required(),
        ToolEntry::new(
            "getTextMessageTemplate",
            "Get a text message template by ID",
            RouteBinding::get("/textMessageTemplates/{id}"),
        )
        .number("id", "Template ID")
        .required(),
        ToolEntry::new(
            "updateTextMessageTemplate",
            "Update a text message template",
            RouteBinding::update("/textMessageTemplates/{id}"),
        )
        .number("id", "Template ID")
        .required()
        .string("name", "Name")
        .string("body", "Body"),
        ToolEntry::new(
            "mergeTextMessageTemplate",
            "Merge a text message template with person data",
            RouteBinding::create("/textMessageTemplates/merge"),
        )
        .number("templateId", "Template ID")
        .required()
        .number("personId", "Person ID")
        .required(),
        ToolEntry::new(
            "deleteTextMessageTemplate",
            "Delete a text message template",
            RouteBinding::delete(
                "/textMessageTemplates/{id}",
                "Text message template {id} deleted",
            ),
        )
        .number("id", "Template ID")
        .required(),
        // Email marketing
        ToolEntry::new(
            "listEmEvents",
            "List email marketing events",
            RouteBinding::list("/emEvents", "emEvents"),
        )
        .paginated(),
        ToolEntry::new(
            "createEmEvent",
            "Create email marketing events",
            RouteBinding::create("/emEvents"),
        )
        .number("campaignId", "Campaign ID")
        .required()
        .array("events", ItemType::Object, "Events array: [{type, email, timestamp}]")
        .required(),
        ToolEntry::new(
            "listEmCampaigns",
            "List email marketing campaigns",
            RouteBinding::list("/emCampaigns", "emCampaigns"),
        )
        .paginated(),
        ToolEntry::new(
            "createEmCampaign",
            "Create an email marketing campaign",
            RouteBinding::create("/emCampaigns"),
        )
        .string("origin", "Campaign origin")
        .required()
        .string("originId", "Origin ID")
        .string("subject", "Email subject")
        .required()
        .string("bodyHtml", "Email body HTML")
        .required(),
        ToolEntry::new(
            "updateEmCampaign",
            "Update an email marketing campaign",
            RouteBinding::update("/emCampaigns/{id}"),
        )
        .number("id", "Campaign ID")
        .required()
        .string("origin", "Origin")
        .string("originId", "Origin ID")
        .string("subject", "Subject")
        .string("bodyHtml", "Body HTML"),
    ]
}
