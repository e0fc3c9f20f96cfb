use serde::{Deserialize, Serialize};

use crate::model::vo::Reference;

/// A physical connection point of a utility, e.g. an electricity meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub facility_id: i32,
    /// European article number identifying the connection point.
    pub ean: i64,
    pub address: String,
    pub utility_id: Option<i32>,
}

impl Reference for Facility {
    type Id = i32;

    fn id(&self) -> i32 {
        self.facility_id
    }

    fn display_label(&self) -> String {
        format!("{} | {}", self.ean, self.address)
    }
}
