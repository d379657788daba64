//! Notes, calls and text messages.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Notes
        ToolEntry::new("createNote", "Create a note on a person", RouteBinding::create("/notes"))
            .number("personId", "Person ID")
            .required()
            .string("body", "Note body/content")
            .required()
            .number("userId", "User ID who created the note")
            .string("createdAt", "ISO timestamp"),
        ToolEntry::new("getNote", "Get a note by ID", RouteBinding::get("/notes/{id}"))
            .number("id", "Note ID")
            .required(),
        ToolEntry::new("updateNote", "Update a note", RouteBinding::update("/notes/{id}"))
            .number("id", "Note ID")
            .required()
            .string("body", "Updated note body")
            .required(),
        ToolEntry::new(
            "deleteNote",
            "Delete a note",
            RouteBinding::delete("/notes/{id}", "Note {id} deleted"),
        )
        .number("id", "Note ID")
        .required(),
        // Calls
        ToolEntry::new("listCalls", "List calls", RouteBinding::list("/calls", "calls"))
            .limit()
            .next_cursor()
            .offset()
            .number("personId", "Filter by person ID"),
        ToolEntry::new("createCall", "Log a call for a person", RouteBinding::create("/calls"))
            .number("personId", "Person ID")
            .required()
            .number("duration", "Call duration in seconds")
            .string("direction", "Call direction: inbound or outbound")
            .number("userId", "User who made the call")
            .string("notes", "Call notes")
            .string("occurredAt", "ISO timestamp when call occurred"),
        ToolEntry::new("getCall", "Get a call by ID", RouteBinding::get("/calls/{id}"))
            .number("id", "Call ID")
            .required(),
        ToolEntry::new("updateCall", "Update a call record", RouteBinding::update("/calls/{id}"))
            .number("id", "Call ID")
            .required()
            .number("personId", "Person ID")
            .number("duration", "Duration")
            .string("direction", "Direction")
            .number("userId", "User ID")
            .string("notes", "Notes")
            .string("occurredAt", "Timestamp"),
        // Text messages
        ToolEntry::new(
            "listTextMessages",
            "List text messages",
            RouteBinding::list("/textMessages", "textMessages"),
        )
        .limit()
        .next_cursor()
        .offset()
        .number("personId", "Filter by person ID"),
        ToolEntry::new(
            "createTextMessage",
            "Send a text message to a person",
            RouteBinding::create("/textMessages"),
        )
        .number("personId", "Person ID")
        .required()
        .string("message", "Message text")
        .required()
        .number("userId", "Sending user ID"),
        ToolEntry::new(
            "getTextMessage",
            "Get a text message by ID",
            RouteBinding::get("/textMessages/{id}"),
        )
        .number("id", "Text message ID")
        .required(),
    ]
}
