use serde::{Deserialize, Serialize};

use crate::model::vo::{Reference, Translatable};

/// The kind of work an order represents, e.g. a meter change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderType {
    pub order_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// `None` for the defaults shared by every utility.
    pub utility_id: Option<i32>,
}

impl Reference for OrderType {
    type Id = i32;

    fn id(&self) -> i32 {
        self.order_type_id
    }

    fn display_label(&self) -> String {
        self.name.to_owned()
    }
}

impl Translatable for OrderType {
    fn relabel(&mut self, label: &str) {
        self.name = label.to_owned();
    }
}
