use domain_order::{
    model::vo::{Permission, SessionContext},
    service::PermissionService,
};

/// Role based permission checks, the answer is cached in the session on first use.
#[derive(Default)]
pub struct PermissionServiceImpl;

impl PermissionService for PermissionServiceImpl {
    fn has_permission(&self, session: &mut SessionContext, permission: Permission) -> bool {
        if let Some(granted) = session.cached_permission(permission) {
            return granted;
        }
        let Some(user) = session.user() else {
            return false;
        };
        let granted = user.is_authorized(permission.required_role());
        tracing::debug!(
            "User {} is {} permission {permission:?}.",
            user.user_id,
            if granted { "granted" } else { "denied" }
        );
        session.cache_permission(permission, granted);
        granted
    }

    fn authenticated(&self, session: &SessionContext) -> bool {
        session.user().is_some()
    }
}
