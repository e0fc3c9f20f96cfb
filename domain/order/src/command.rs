use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Create order form as submitted by the client.
///
/// Dates and times are wall-clock values in the configured timezone.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderCommand {
    /// The utility the form was rendered for.
    pub utility_id: Option<i32>,
    pub order_type_id: Option<i32>,
    pub order_status_id: Option<i32>,
    pub facility_id: Option<i32>,
    pub location_id: Option<i32>,
    pub checklist_id: Option<i32>,
    pub ext_id: Option<String>,
    pub technician_id: Option<String>,
    /// Today when absent.
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_start_time: Option<NaiveTime>,
    pub scheduled_end_time: Option<NaiveTime>,
}

impl CreateOrderCommand {
    /// The external id with surrounding whitespace removed, blank is absent.
    pub fn normalized_ext_id(&self) -> Option<String> {
        self.ext_id
            .as_deref()
            .map(str::trim)
            .filter(|el| !el.is_empty())
            .map(ToOwned::to_owned)
    }
}
