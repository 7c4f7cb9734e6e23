//! Backend resource shapes
//!
//! The API namespaces pass bodies through untouched; these types are for
//! callers that want to build request bodies or decode responses with
//! [`ApiResponse::json`](crate::client::ApiResponse::json).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Growth stage of a planting cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Planning,
    Sowing,
    Germinating,
    Growing,
    PlantedOut,
    Harvesting,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Sowing,
    Germination,
    Transplanting,
    Watering,
    Fertilizing,
    PlantingOut,
    Harvest,
    Pruning,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Plant as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub seed_source: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub cycles: Vec<PlantingCycle>,
    pub cycle_count: u32,
    pub latest_cycle: Option<PlantingCycle>,
    pub created_at: DateTime<Utc>,
}

/// Plant as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub variety: String,
    pub cycle_count: u32,
    pub latest_cycle_year: Option<i32>,
    /// Display label of the latest cycle's status
    pub latest_cycle_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingCycle {
    pub id: u64,
    pub plant: u64,
    pub plant_name: String,
    #[serde(default)]
    pub plant_variety: String,
    pub year: i32,
    pub status: CycleStatus,
    pub status_display: String,
    pub seed_saved: bool,
    #[serde(default)]
    pub seed_saved_notes: String,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub event_count: u32,
    pub task_count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub planting_cycle: u64,
    pub event_type: EventType,
    pub event_type_display: String,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    /// Decimal quantity as the backend formats it, e.g. `"2.50"`
    pub quantity: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub planting_cycle: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub priority_display: String,
    pub created_at: DateTime<Utc>,
}

/// Payload of `GET /dashboard/stats/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub current_year: i32,
    pub stats: StatCounts,
    pub cycles: Vec<PlantingCycle>,
    pub upcoming_tasks: Vec<Task>,
    pub overdue_tasks: Vec<Task>,
    pub recent_harvests: HarvestSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCounts {
    pub total_plants: u32,
    pub current_cycles: u32,
    pub open_tasks: u32,
    pub overdue_tasks: u32,
    pub recent_events: u32,
}

/// Harvest events of the last 30 days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarvestSummary {
    pub count: u32,
    pub total_quantity: f64,
}

// ========================
// Write payloads
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCycle {
    pub plant: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CycleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_saved_notes: Option<String>,
}

/// Event body; `planting_cycle` may be left out when posting to a cycle's
/// `add_event` action, which assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_cycle: Option<u64>,
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewEvent {
    pub fn new(event_type: EventType) -> Self {
        Self {
            planting_cycle: None,
            event_type,
            event_date: None,
            location: None,
            quantity: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_cycle: Option<u64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

// ========================
// List filters (query parameters)
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlantFilter {
    /// Matches name, variety and seed source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Plants with a cycle in this year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CycleFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CycleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Only open tasks past their due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue: Option<bool>,
}
