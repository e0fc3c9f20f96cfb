use serde::{Deserialize, Serialize};

use crate::model::vo::Reference;

/// A named set of tasks a technician completes during an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub checklist_id: i32,
    pub name: String,
    pub utility_id: Option<i32>,
}

impl Reference for Checklist {
    type Id = i32;

    fn id(&self) -> i32 {
        self.checklist_id
    }

    fn display_label(&self) -> String {
        self.name.to_owned()
    }
}
