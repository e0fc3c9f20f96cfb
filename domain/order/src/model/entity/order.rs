use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled field-service task.
///
/// Created transiently from a validated form, it becomes durable once the
/// transaction it was added to commits. `order_id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Option<i32>,
    pub order_type_id: i32,
    pub order_status_id: i32,
    pub facility_id: Option<i32>,
    pub location_id: Option<i32>,
    pub checklist_id: Option<i32>,
    /// Technician assigned to the order.
    pub technician_id: Option<String>,
    /// Reference of the order in an external system.
    pub ext_id: Option<String>,
    pub scheduled_start_at: Option<DateTime<Utc>>,
    pub scheduled_end_at: Option<DateTime<Utc>>,
    /// User that created the order.
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Both scheduled bounds are absent, or both are present with start before end.
    pub fn schedule_is_consistent(&self) -> bool {
        match (self.scheduled_start_at, self.scheduled_end_at) {
            (None, None) => true,
            (Some(start), Some(end)) => start < end,
            _ => false,
        }
    }
}
