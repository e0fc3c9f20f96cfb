use serde::{Deserialize, Serialize};

use crate::model::entity::Role;

/// Operations that require a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Create and edit orders.
    OrdersEdit,
}

impl Permission {
    /// The lowest role granted this permission.
    pub fn required_role(self) -> Role {
        match self {
            Permission::OrdersEdit => Role::User,
        }
    }
}
