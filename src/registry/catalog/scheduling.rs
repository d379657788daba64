//! Tasks, appointments, appointment types/outcomes and webhooks.

use super::*;

pub(super) fn entries() -> Vec<ToolEntry> {
    vec![
        // Tasks
        ToolEntry::new("listTasks", "List tasks", RouteBinding::list("/tasks", "tasks"))
            .paginated()
            .next_cursor()
            .sort()
            .fields(),
        ToolEntry::new("createTask", "Create a task", RouteBinding::create("/tasks"))
            .number("personId", "Person ID")
            .string("name", "Task name")
            .required()
            .string("dueDate", "Due date ISO")
            .number("assignedUserId", "Assigned user ID")
            .string("status", "Task status"),
        ToolEntry::new("getTask", "Get a task by ID", RouteBinding::get("/tasks/{id}"))
            .number("id", "Task ID")
            .required(),
        ToolEntry::new("updateTask", "Update a task", RouteBinding::update("/tasks/{id}"))
            .number("id", "Task ID")
            .required()
            .number("personId", "Person ID")
            .string("name", "Name")
            .string("dueDate", "Due date")
            .number("assignedUserId", "Assigned user")
            .string("status", "Status"),
        ToolEntry::new(
            "deleteTask",
            "Delete a task",
            RouteBinding::delete("/tasks/{id}", "Task {id} deleted"),
        )
        .number("id", "Task ID")
        .required(),
        // Appointments
        ToolEntry::new(
            "listAppointments",
            "List appointments",
            RouteBinding::list("/appointments", "appointments"),
        )
        .limit()
        .next_cursor()
        .offset()
        .number("personId", "Filter by person"),
        ToolEntry::new(
            "createAppointment",
            "Create an appointment",
            RouteBinding::create("/appointments"),
        )
        .number("personId", "Person ID")
        .number("appointmentTypeId", "Appointment type ID")
        .number("appointmentOutcomeId", "Outcome ID")
        .array("invitees", ItemType::Object, "Invitees")
        .string("startTime", "Start time ISO")
        .string("endTime", "End time ISO")
        .string("title", "Appointment title")
        .string("description", "Description")
        .string("location", "Location"),
        ToolEntry::new(
            "getAppointment",
            "Get an appointment by ID",
            RouteBinding::get("/appointments/{id}"),
        )
        .number("id", "Appointment ID")
        .required(),
        ToolEntry::new(
            "updateAppointment",
            "Update an appointment",
            RouteBinding::update("/appointments/{id}"),
        )
        .number("id", "Appointment ID")
        .required()
        .number("personId", "Person ID")
        .number("appointmentTypeId", "Type ID")
        .number("appointmentOutcomeId", "Outcome ID")
        .array("invitees", ItemType::Object, "Invitees")
        .string("startTime", "Start time")
        .string("endTime", "End time")
        .string("title", "Title")
        .string("description", "Description")
        .string("location", "Location"),
        ToolEntry::new(
            "deleteAppointment",
            "Delete an appointment",
            RouteBinding::delete("/appointments/{id}", "Appointment {id} deleted"),
        )
        .number("id", "Appointment ID")
        .required(),
        // Appointment types
        ToolEntry::new(
            "listAppointmentTypes",
            "List appointment types",
            RouteBinding::list_all("/appointmentTypes", "appointmentTypes"),
        ),
        ToolEntry::new(
            "createAppointmentType",
            "Create an appointment type",
            RouteBinding::create("/appointmentTypes"),
        )
        .string("name", "Type name")
        .required(),
        ToolEntry::new(
            "getAppointmentType",
            "Get appointment type by ID",
            RouteBinding::get("/appointmentTypes/{id}"),
        )
        .number("id", "Type ID")
        .required(),
        ToolEntry::new(
            "updateAppointmentType",
            "Update an appointment type",
            RouteBinding::update("/appointmentTypes/{id}"),
        )
        .number("id", "Type ID")
        .required()
        .string("name", "Name")
        .required(),
        ToolEntry::new(
            "deleteAppointmentType",
            "Delete an appointment type",
            RouteBinding::delete("/appointmentTypes/{id}", "Appointment type {id} deleted"),
        )
        .number("id", "Type ID")
        .required(),
        // Appointment outcomes
        ToolEntry::new(
            "listAppointmentOutcomes",
            "List appointment outcomes",
            RouteBinding::list_all("/appointmentOutcomes", "appointmentOutcomes"),
        ),
        ToolEntry::new(
            "createAppointmentOutcome",
            "Create an appointment outcome",
            RouteBinding::create("/appointmentOutcomes"),
        )
        .string("name", "Outcome name")
        .required(),
        ToolEntry::new(
            "getAppointmentOutcome",
            "Get appointment outcome by ID",
            RouteBinding::get("/appointmentOutcomes/{id}"),
        )
        .number("id", "Outcome ID")
        .required(),
        ToolEntry::new(
            "updateAppointmentOutcome",
            "Update an appointment outcome",
            RouteBinding::update("/appointmentOutcomes/{id}"),
        )
        .number("id", "Outcome ID")
        .required()
        .string("name", "Name")
        .required(),
        ToolEntry::new(
            "deleteAppointmentOutcome",
            "Delete an appointment outcome",
            RouteBinding::delete("/appointmentOutcomes/{id}", "Appointment outcome {id} deleted"),
        )
        .number("id", "Outcome ID")
        .required(),
        // Webhooks
        ToolEntry::new(
            "listWebhooks",
            "List all webhooks",
            RouteBinding::list_all("/webhooks", "webhooks"),
        ),
        ToolEntry::new("createWebhook", "Create a webhook", RouteBinding::create("/webhooks"))
            .string("event", "Webhook event type")
            .required()
            .string("url", "Callback URL")
            .required(),
        ToolEntry::new("getWebhook", "Get a webhook by ID", RouteBinding::get("/webhooks/{id}"))
            .number("id", "Webhook ID")
            .required(),
        ToolEntry::new("updateWebhook", "Update a webhook", RouteBinding::update("/webhooks/{id}"))
            .number("id", "Webhook ID")
            .required()
            .string("event", "Event type")
            .string("url", "Callback URL"),
        ToolEntry::new(
            "deleteWebhook",
            "Delete a webhook",
            RouteBinding::delete("/webhooks/{id}", "Webhook {id} deleted"),
        )
        .number("id", "Webhook ID")
        .required(),
        ToolEntry::new(
            "getWebhookEvents",
            "Get events for a webhook",
            RouteBinding::get("/webhookEvents/{id}"),
        )
        .number("id", "Webhook ID")
        .required(),
    ]
}
