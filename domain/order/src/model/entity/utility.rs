use serde::{Deserialize, Serialize};

use crate::model::vo::{Reference, Translatable};

/// Top-level classifier of the business, e.g. electricity or district heating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utility {
    pub utility_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Reference for Utility {
    type Id = i32;

    fn id(&self) -> i32 {
        self.utility_id
    }

    fn display_label(&self) -> String {
        self.name.to_owned()
    }
}

impl Translatable for Utility {
    fn relabel(&mut self, label: &str) {
        self.name = label.to_owned();
    }
}
