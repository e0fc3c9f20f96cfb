use serde::{Deserialize, Serialize};

use crate::model::vo::Reference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: i32,
    pub name: String,
}

impl Reference for Location {
    type Id = i32;

    fn id(&self) -> i32 {
        self.location_id
    }

    fn display_label(&self) -> String {
        self.name.to_owned()
    }
}
