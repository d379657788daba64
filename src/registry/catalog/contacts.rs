//! Events, people, person attachments, relationships and identity.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Events
        ToolEntry::new(
            "listEvents",
            "List events from FUB. Filter by personId, type, property address, etc.",
            RouteBinding::list("/events", "events"),
        )
        .limit()
        .next_cursor()
        .offset()
        .number("personId", "Filter by person ID")
        .string("type", "Filter by event type")
        .boolean("hasProperty", "Filter events that have property data")
        .string("propertyAddress", "Filter by property address"),
        ToolEntry::new(
            "createEvent",
            "Create a new event in FUB (lead event, property inquiry, etc)",
            RouteBinding::create("/events"),
        )
        .string("source", "Source of the event (e.g. website name)")
        .string("system", "System identifier")
        .string("type", "Event type (e.g. Registration, Property Inquiry, General Inquiry)")
        .string("message", "Event message")
        .string("description", "Event description")
        .string("occurredAt", "ISO 8601 timestamp when event occurred")
        .object("person", "Person data: {id, firstName, lastName, stage, source, sourceUrl, contacted, price, assignedTo, assignedUserId, assignedLenderId, assignedLenderName, emails:[], phones:[], addresses:[], tags:[], custom*}")
        .object("property", "Property data: {street, city, state, code, mlsNumber, price, forRent, url, type, bedrooms, bathrooms, area, lot}")
        .object("propertySearch", "Property search criteria: {type, neighborhood, city, state, code, minPrice, maxPrice, minBedrooms, maxBedrooms, minBathrooms, maxBathrooms}")
        .object("campaign", "Campaign tracking: {source, medium, term, content, campaign}")
        .string("pageTitle", "Title of the page where event occurred")
        .string("pageUrl", "URL of the page where event occurred")
        .string("pageReferrer", "Referrer URL")
        .number("pageDuration", "Time spent on page in seconds"),
        ToolEntry::new("getEvent", "Get a single event by ID", RouteBinding::get("/events/{id}"))
            .number("id", "Event ID")
            .required(),
        // People
        ToolEntry::new(
            "listPeople",
            "List/search people in FUB with extensive filtering options",
            RouteBinding::list("/people", "people"),
        )
        .string("id", "Comma-separated person IDs")
        .sort()
        .limit()
        .offset()
        .next_cursor()
        .fields()
        .string("lastActivityAfter", "ISO date - only people with activity after this date")
        .string("lastActivityBefore", "ISO date - only people with activity before this date")
        .string("name", "Search by name")
        .string("firstName", "Filter by first name")
        .string("lastName", "Filter by last name")
        .string("email", "Filter by email")
        .string("phone", "Filter by phone")
        .string("stage", "Filter by stage")
        .string("source", "Filter by source")
        .string("assignedTo", "Filter by assigned agent name")
        .number("assignedUserId", "Filter by assigned user ID")
        .number("assignedPondId", "Filter by assigned pond ID")
        .string("assignedLenderName", "Filter by lender name")
        .number("assignedLenderId", "Filter by lender ID")
        .boolean("contacted", "Filter by contacted status")
        .number("priceAbove", "Minimum price filter")
        .number("priceBelow", "Maximum price filter")
        .number("smartListId", "Filter by smart list ID")
        .boolean("includeTrash", "Include trashed people")
        .boolean("includeUnclaimed", "Include unclaimed people")
        .string("tags", "Comma-separated tags to filter by"),
        ToolEntry::new(
            "createPerson",
            "Create a new person/contact in FUB",
            RouteBinding::create("/people").query_flag("deduplicate"),
        )
        .boolean("deduplicate", "Check for duplicates before creating (query param)")
        .string("createdAt", "ISO timestamp for creation date")
        .string("firstName", "First name")
        .string("lastName", "Last name")
        .string("stage", "Pipeline stage")
        .string("source", "Lead source")
        .string("sourceUrl", "Source URL")
        .boolean("contacted", "Whether person has been contacted")
        .number("price", "Price point")
        .string("assignedTo", "Assigned agent name")
        .number("assignedUserId", "Assigned user ID")
        .number("assignedPondId", "Assigned pond ID")
        .string("assignedLenderName", "Assigned lender name")
        .number("assignedLenderId", "Assigned lender ID")
        .array("emails", ItemType::Object, "Email addresses: [{value, type}]")
        .array("phones", ItemType::Object, "Phone numbers: [{value, type}]")
        .array("addresses", ItemType::Object, "Addresses: [{street, city, state, code, type}]")
        .array("tags", ItemType::String, "Tags to apply")
        .string("background", "Background info")
        .array("collaborators", ItemType::Number, "Collaborator user IDs")
        .number("timeframeId", "Timeframe ID"),
        ToolEntry::new(
            "getPerson",
            "Get a single person by ID",
            RouteBinding::get("/people/{id}").forward_query(),
        )
        .number("id", "Person ID")
        .required()
        .fields(),
        ToolEntry::new(
            "updatePerson",
            "Update an existing person in FUB",
            RouteBinding::update("/people/{id}").query_flag("mergeTags"),
        )
        .number("id", "Person ID to update")
        .required()
        .boolean("mergeTags", "Merge tags instead of replacing (query param)")
        .string("firstName", "First name")
        .string("lastName", "Last name")
        .string("stage", "Pipeline stage")
        .boolean("contacted", "Contacted status")
        .number("price", "Price point")
        .string("assignedTo", "Assigned agent name")
        .number("assignedUserId", "Assigned user ID")
        .number("assignedPondId", "Assigned pond ID")
        .string("assignedLenderName", "Assigned lender name")
        .number("assignedLenderId", "Assigned lender ID")
        .array("emails", ItemType::Object, "Email addresses: [{value, type}]")
        .array("phones", ItemType::Object, "Phone numbers: [{value, type}]")
        .array("addresses", ItemType::Object, "Addresses: [{street, city, state, code, type}]")
        .array("tags", ItemType::String, "Tags")
        .string("background", "Background info")
        .number("timeframeId", "Timeframe ID"),
        ToolEntry::new(
            "deletePerson",
            "Delete (trash) a person by ID",
            RouteBinding::delete("/people/{id}", "Person {id} deleted"),
        )
        .number("id", "Person ID to delete")
        .required(),
        ToolEntry::new(
            "checkDuplicate",
            "Check if a person already exists by email or phone",
            RouteBinding::get("/people/checkDuplicate").forward_query(),
        )
        .string("email", "Email to check")
        .string("phone", "Phone to check"),
        ToolEntry::new(
            "listUnclaimed",
            "List unclaimed people (in ponds, not assigned)",
            RouteBinding::list("/people/unclaimed", "people"),
        )
        .paginated(),
        ToolEntry::new(
            "claimPerson",
            "Claim an unclaimed person",
            RouteBinding::create("/people/claim"),
        )
        .number("personId", "Person ID to claim")
        .required(),
        // Person attachments
        ToolEntry::new(
            "createPersonAttachment",
            "Attach a file to a person",
            RouteBinding::create("/personAttachments"),
        )
        .number("personId", "Person ID")
        .required()
        .string("uri", "File URI")
        .required()
        .string("fileName", "File name")
        .required()
        .number("fileSize", "File size in bytes"),
        ToolEntry::new(
            "getPersonAttachment",
            "Get a person attachment by ID",
            RouteBinding::get("/personAttachments/{id}"),
        )
        .number("id", "Attachment ID")
        .required(),
        ToolEntry::new(
            "updatePersonAttachment",
            "Update a person attachment",
            RouteBinding::update("/personAttachments/{id}"),
        )
        .number("id", "Attachment ID")
        .required()
        .number("personId", "Person ID")
        .required()
        .string("uri", "File URI")
        .required()
        .string("fileName", "File name")
        .required()
        .number("fileSize", "File size"),
        ToolEntry::new(
            "deletePersonAttachment",
            "Delete a person attachment",
            RouteBinding::delete("/personAttachments/{id}", "Person attachment {id} deleted"),
        )
        .number("id", "Attachment ID")
        .required(),
        // Relationships
        ToolEntry::new(
            "listRelationships",
            "List relationships for a person",
            RouteBinding::list("/peopleRelationships", "peopleRelationships"),
        )
        .number("personId", "Person ID")
        .paginated(),
        ToolEntry::new(
            "createRelationship",
            "Create a relationship between two people",
            RouteBinding::create("/peopleRelationships"),
        )
        .number("personId", "First person ID")
        .required()
        .number("relatedPersonId", "Related person ID")
        .required()
        .string("relationshipType", "Type of relationship")
        .string("notes", "Notes about the relationship"),
        ToolEntry::new(
            "getRelationship",
            "Get a relationship by ID",
            RouteBinding::get("/peopleRelationships/{id}"),
        )
        .number("id", "Relationship ID")
        .required(),
        ToolEntry::new(
            "updateRelationship",
            "Update a relationship",
            RouteBinding::update("/peopleRelationships/{id}"),
        )
        .number("id", "Relationship ID")
        .required()
        .string("relationshipType", "Type of relationship")
        .string("notes", "Notes"),
        ToolEntry::new(
            "deleteRelationship",
            "Delete a relationship",
            RouteBinding::delete("/peopleRelationships/{id}", "Relationship {id} deleted"),
        )
        .number("id", "Relationship ID")
        .required(),
        // Identity
        ToolEntry::new(
            "getIdentity",
            "Get identity/account information for the API key",
            RouteBinding::get("/identity"),
        ),
        ToolEntry::new(
            "getCurrentUser",
            "Get the current authenticated user (GET /me)",
            RouteBinding::get("/me"),
        ),
    ]
}
