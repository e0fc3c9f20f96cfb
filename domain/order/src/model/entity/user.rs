use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::model::vo::Reference;

/// A user of the application. Technicians are the users orders can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub displayname: String,
    pub role: Role,
    pub is_technician: bool,
}

/// Roles ordered by the rights they carry, each role includes the rights of the ones below it.
#[derive(
    FromPrimitive,
    ToPrimitive,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Role {
    #[default]
    Viewer = 1,
    User = 2,
    SuperUser = 3,
    Admin = 4,
}

impl Role {
    /// Whether this role carries the rights of `required`.
    pub fn is_authorized(self, required: Role) -> bool {
        self >= required
    }
}

impl User {
    pub fn is_authorized(&self, required: Role) -> bool {
        self.role.is_authorized(required)
    }
}

impl Reference for User {
    type Id = String;

    fn id(&self) -> String {
        self.user_id.to_owned()
    }

    fn display_label(&self) -> String {
        self.displayname.to_owned()
    }
}
