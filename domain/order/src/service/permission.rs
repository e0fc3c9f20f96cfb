use crate::model::vo::{Permission, SessionContext};

/// Capability checks of the signed-in user, cached in the session.
pub trait PermissionService: Send + Sync {
    fn has_permission(&self, session: &mut SessionContext, permission: Permission) -> bool;

    fn authenticated(&self, session: &SessionContext) -> bool;
}
