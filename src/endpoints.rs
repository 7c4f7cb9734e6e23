// API path constants - single source of truth for all backend paths.
// The backend routes every collection and detail endpoint with a trailing slash.

use std::fmt::Display;

pub const PLANTS: &str = "/plants/";
pub const CYCLES: &str = "/cycles/";
pub const EVENTS: &str = "/events/";
pub const TASKS: &str = "/tasks/";
pub const DASHBOARD_STATS: &str = "/dashboard/stats/";

pub const PLANT_CYCLES_DETAIL: &str = "cycles_detail";
pub const CYCLE_ADD_EVENT: &str = "add_event";
pub const CYCLE_ADD_TASK: &str = "add_task";
pub const TASK_TOGGLE_COMPLETE: &str = "toggle_complete";

/// `/plants/` + `42` -> `/plants/42/`. The id is substituted verbatim.
pub fn detail(collection: &str, id: impl Display) -> String {
    format!("{}{}/", collection, id)
}

/// `/cycles/` + `3` + `add_event` -> `/cycles/3/add_event/`
pub fn action(collection: &str, id: impl Display, action: &str) -> String {
    format!("{}{}/{}/", collection, id, action)
}
