//! Inbox apps, reactions and threaded replies.
//!
//! Inbox app endpoints are action-style paths with no resource ID; the
//! whole argument object is the request payload.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "inboxAppAddMessage",
            "Add a message to an inbox app conversation",
            RouteBinding::create("/inboxApps/addMessage"),
        )
        .string("conversationId", "Conversation ID")
        .required()
        .string("message", "Message content")
        .required()
        .object("sender", "Sender info")
        .string("timestamp", "ISO timestamp"),
        ToolEntry::new(
            "inboxAppUpdateMessage",
            "Update an inbox app message",
            RouteBinding::update("/inboxApps/updateMessage"),
        )
        .string("messageId", "Message ID")
        .required()
        .string("message", "Updated message")
        .required(),
        ToolEntry::new(
            "inboxAppAddNote",
            "Add a note to an inbox app conversation",
            RouteBinding::create("/inboxApps/addNote"),
        )
        .string("conversationId", "Conversation ID")
        .required()
        .string("note", "Note content")
        .required(),
        ToolEntry::new(
            "inboxAppUpdateConversation",
            "Update an inbox app conversation status",
            RouteBinding::update("/inboxApps/updateConversation"),
        )
        .string("conversationId", "Conversation ID")
        .required()
        .string("status", "New status"),
        ToolEntry::new(
            "inboxAppGetParticipants",
            "Get participants of an inbox app conversation",
            RouteBinding::get("/inboxApps/participants").forward_query(),
        )
        .string("conversationId", "Conversation ID")
        .required(),
        ToolEntry::new(
            "inboxAppCreateParticipant",
            "Add a participant to an inbox app conversation",
            RouteBinding::create("/inboxApps/participants"),
        )
        .string("conversationId", "Conversation ID")
        .required()
        .number("personId", "Person ID to add")
        .required(),
        ToolEntry::new(
            "inboxAppDeleteParticipant",
            "Remove a participant from an inbox app conversation",
            RouteBinding::delete("/inboxApps/participants", "Participant removed").send_body(),
        )
        .string("conversationId", "Conversation ID")
        .required()
        .number("personId", "Person ID to remove")
        .required(),
        ToolEntry::new(
            "inboxAppInstall",
            "Install an inbox app",
            RouteBinding::create("/inboxApps/install"),
        )
        .string("name", "App name")
        .required()
        .string("url", "App URL")
        .required(),
        ToolEntry::new(
            "inboxAppDeactivate",
            "Deactivate the inbox app",
            RouteBinding::delete("/inboxApps/deactivate", "Inbox app deactivated"),
        ),
        ToolEntry::new(
            "listInboxAppInstallations",
            "List inbox app installations",
            RouteBinding::get("/inboxApps/installations"),
        ),
        // Reactions
        ToolEntry::new(
            "getReactions",
            "Get reactions for an item",
            RouteBinding::get("/reactions/{id}"),
        )
        .number("id", "Item ID")
        .required(),
        ToolEntry::new(
            "createReaction",
            "Create a reaction on an item",
            RouteBinding::create("/reactions/{refType}/{refId}"),
        )
        .string("refType", "Reference type (e.g. note, email)")
        .required()
        .number("refId", "Reference ID")
        .required()
        .string("emoji", "Emoji reaction")
        .required(),
        ToolEntry::new(
            "deleteReaction",
            "Delete a reaction from an item",
            RouteBinding::delete("/reactions/{refType}/{refId}", "Reaction deleted"),
        )
        .string("refType", "Reference type")
        .required()
        .number("refId", "Reference ID")
        .required(),
        // Threaded replies
        ToolEntry::new(
            "getThreadedReplies",
            "Get threaded replies for an item",
            RouteBinding::get("/threadedReplies/{id}"),
        )
        .number("id", "Item ID")
        .required(),
    ]
}
