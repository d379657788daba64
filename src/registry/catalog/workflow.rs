//! Users, smart lists, action plans and automations.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Users
        ToolEntry::new(
            "listUsers",
            "List all users/agents in the account",
            RouteBinding::list("/users", "users"),
        )
        .limit()
        .next_cursor()
        .offset()
        .sort()
        .fields()
        .string("id", "Comma-separated user IDs"),
        ToolEntry::new("getUser", "Get a user by ID", RouteBinding::get("/users/{id}"))
            .number("id", "User ID")
            .required(),
        ToolEntry::new(
            "deleteUser",
            "Delete a user",
            RouteBinding::delete("/users/{id}", "User {id} deleted"),
        )
        .number("id", "User ID")
        .required(),
        // Smart lists
        ToolEntry::new(
            "listSmartLists",
            "List all smart lists",
            RouteBinding::list("/smartLists", "smartLists"),
        )
        .paginated()
        .next_cursor(),
        ToolEntry::new(
            "getSmartList",
            "Get a smart list by ID",
            RouteBinding::get("/smartLists/{id}"),
        )
        .number("id", "Smart list ID")
        .required(),
        // Action plans
        ToolEntry::new(
            "listActionPlans",
            "List all action plans",
            RouteBinding::list("/actionPlans", "actionPlans"),
        )
        .paginated(),
        ToolEntry::new(
            "listActionPlansPeople",
            "List people assigned to action plans",
            RouteBinding::list("/actionPlansPeople", "actionPlansPeople"),
        )
        .number("personId", "Filter by person ID")
        .number("actionPlanId", "Filter by action plan ID")
        .paginated(),
        ToolEntry::new(
            "addPersonToActionPlan",
            "Add a person to an action plan",
            RouteBinding::create("/actionPlansPeople"),
        )
        .number("personId", "Person ID")
        .required()
        .number("actionPlanId", "Action plan ID")
        .required(),
        ToolEntry::new(
            "updateActionPlanPerson",
            "Update a person's action plan status",
            RouteBinding::update("/actionPlansPeople/{id}"),
        )
        .number("id", "ActionPlanPerson ID")
        .required()
        .string("status", "New status"),
        // Automations
        ToolEntry::new(
            "listAutomations",
            "List all automations",
            RouteBinding::list("/automations", "automations"),
        )
        .paginated(),
        ToolEntry::new(
            "getAutomation",
            "Get an automation by ID",
            RouteBinding::get("/automations/{id}"),
        )
        .number("id", "Automation ID")
        .required(),
        ToolEntry::new(
            "listAutomationsPeople",
            "List people in automations",
            RouteBinding::list("/automationsPeople", "automationsPeople"),
        )
        .number("personId", "Filter by person")
        .number("automationId", "Filter by automation")
        .paginated(),
        ToolEntry::new(
            "getAutomationPerson",
            "Get an automation-person entry by ID",
            RouteBinding::get("/automationsPeople/{id}"),
        )
        .number("id", "AutomationPerson ID")
        .required(),
        ToolEntry::new(
            "addPersonToAutomation",
            "Add a person to an automation",
            RouteBinding::create("/automationsPeople"),
        )
        .number("personId", "Person ID")
        .required()
        .number("automationId", "Automation ID")
        .required(),
        ToolEntry::new(
            "updateAutomationPerson",
            "Update a person's automation status",
            RouteBinding::update("/automationsPeople/{id}"),
        )
        .number("id", "AutomationPerson ID")
        .required()
        .string("status", "New status"),
    ]
}
