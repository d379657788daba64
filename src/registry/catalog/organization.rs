//! Groups, teams, team inboxes, ponds and timeframes.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Groups
        ToolEntry::new("listGroups", "List all groups", RouteBinding::list_all("/groups", "groups")),
        ToolEntry::new(
            "listRoundRobinGroups",
            "List round robin groups",
            RouteBinding::list_all("/groups/roundRobin", "groups"),
        ),
        ToolEntry::new("createGroup", "Create a group", RouteBinding::create("/groups"))
            .string("name", "Group name")
            .required()
            .array("userIds", ItemType::Number, "User IDs"),
        ToolEntry::new("getGroup", "Get a group by ID", RouteBinding::get("/groups/{id}"))
            .number("id", "Group ID")
            .required(),
        ToolEntry::new("updateGroup", "Update a group", RouteBinding::update("/groups/{id}"))
            .number("id", "Group ID")
            .required()
            .string("name", "Name")
            .array("userIds", ItemType::Number, "User IDs"),
        ToolEntry::new(
            "deleteGroup",
            "Delete a group",
            RouteBinding::delete("/groups/{id}", "Group {id} deleted"),
        )
        .number("id", "Group ID")
        .required(),
        // Teams
        ToolEntry::new("listTeams", "List all teams", RouteBinding::list_all("/teams", "teams")),
        ToolEntry::new("createTeam", "Create a team", RouteBinding::create("/teams"))
            .string("name", "Team name")
            .required()
            .string("description", "Team description"),
        ToolEntry::new("getTeam", "Get a team by ID", RouteBinding::get("/teams/{id}"))
            .number("id", "Team ID")
            .required(),
        ToolEntry::new("updateTeam", "Update a team", RouteBinding::update("/teams/{id}"))
            .number("id", "Team ID")
            .required()
            .string("name", "Name")
            .string("description", "Description"),
        ToolEntry::new(
            "deleteTeam",
            "Delete a team",
            RouteBinding::delete("/teams/{id}", "Team {id} deleted"),
        )
        .number("id", "Team ID")
        .required(),
        ToolEntry::new(
            "listTeamInboxes",
            "List all team inboxes",
            RouteBinding::list_all("/teamInboxes", "teamInboxes"),
        ),
        // Ponds
        ToolEntry::new("listPonds", "List all ponds", RouteBinding::list_all("/ponds", "ponds")),
        ToolEntry::new("createPond", "Create a pond", RouteBinding::create("/ponds"))
            .string("name", "Pond name")
            .required(),
        ToolEntry::new("getPond", "Get a pond by ID", RouteBinding::get("/ponds/{id}"))
            .number("id", "Pond ID")
            .required(),
        ToolEntry::new("updatePond", "Update a pond", RouteBinding::update("/ponds/{id}"))
            .number("id", "Pond ID")
            .required()
            .string("name", "Name")
            .required(),
        ToolEntry::new(
            "deletePond",
            "Delete a pond",
            RouteBinding::delete("/ponds/{id}", "Pond {id} deleted"),
        )
        .number("id", "Pond ID")
        .required(),
        ToolEntry::new(
            "listTimeframes",
            "List all timeframes",
            RouteBinding::list_all("/timeframes", "timeframes"),
        ),
    ]
}
