use serde::{Deserialize, Serialize};

use crate::model::vo::{Reference, Translatable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub order_status_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// `None` for the defaults shared by every utility.
    pub utility_id: Option<i32>,
}

impl Reference for OrderStatus {
    type Id = i32;

    fn id(&self) -> i32 {
        self.order_status_id
    }

    fn display_label(&self) -> String {
        self.name.to_owned()
    }
}

impl Translatable for OrderStatus {
    fn relabel(&mut self, label: &str) {
        self.name = label.to_owned();
    }
}
