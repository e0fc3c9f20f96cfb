use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Language, Permission, ValidationErrors};
use crate::model::entity::User;

/// Stable identifier of a form instance within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormKey(String);

impl FormKey {
    pub const CREATE_ORDER: &'static str = "create-order-form";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn create_order() -> Self {
        Self::new(Self::CREATE_ORDER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State kept for one user session between interactions.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<User>,
    language: Language,
    granted_permissions: HashSet<Permission>,
    denied_permissions: HashSet<Permission>,
    form_errors: HashMap<FormKey, ValidationErrors>,
}

impl SessionContext {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.set_user(Some(user));
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|el| el.user_id.as_str())
    }

    /// Cached permission answers belong to the previous user and are dropped when it changes.
    pub fn set_user(&mut self, user: Option<User>) {
        let changed = self.user_id() != user.as_ref().map(|el| el.user_id.as_str());
        if changed {
            self.granted_permissions.clear();
            self.denied_permissions.clear();
        }
        self.user = user;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The cached answer of an earlier check of `permission`.
    pub fn cached_permission(&self, permission: Permission) -> Option<bool> {
        if self.granted_permissions.contains(&permission) {
            Some(true)
        } else if self.denied_permissions.contains(&permission) {
            Some(false)
        } else {
            None
        }
    }

    /// Records the answer for `permission` unless one is already cached.
    pub fn cache_permission(&mut self, permission: Permission, granted: bool) {
        if self.cached_permission(permission).is_some() {
            return;
        }
        if granted {
            self.granted_permissions.insert(permission);
        } else {
            self.denied_permissions.insert(permission);
        }
    }

    /// Errors to show the next time the form with `key` is rendered.
    pub fn stash_form_errors(&mut self, key: FormKey, errors: ValidationErrors) {
        if errors.is_empty() {
            self.form_errors.remove(&key);
        } else {
            self.form_errors.insert(key, errors);
        }
    }

    /// Removes and returns the pending errors of the form with `key`.
    pub fn take_form_errors(&mut self, key: &FormKey) -> ValidationErrors {
        self.form_errors.remove(key).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Role;
    use crate::model::vo::FormField;

    fn user(user_id: &str) -> User {
        User {
            user_id: user_id.to_string(),
            username: user_id.to_string(),
            displayname: user_id.to_string(),
            role: Role::User,
            is_technician: false,
        }
    }

    #[test]
    fn test_form_errors_are_single_shot() {
        let mut session = SessionContext::new(Language::En);
        let mut errors = ValidationErrors::new();
        errors.add(FormField::ScheduledEndTime, "missing end");
        session.stash_form_errors(FormKey::create_order(), errors.clone());

        assert_eq!(session.take_form_errors(&FormKey::create_order()), errors);
        assert!(session.take_form_errors(&FormKey::create_order()).is_empty());
    }

    #[test]
    fn test_form_errors_are_keyed() {
        let mut session = SessionContext::default();
        let mut errors = ValidationErrors::new();
        errors.add(FormField::OrderType, "missing type");
        session.stash_form_errors(FormKey::new("other-form"), errors);

        assert!(session.take_form_errors(&FormKey::create_order()).is_empty());
        assert_eq!(session.take_form_errors(&FormKey::new("other-form")).len(), 1);
    }

    #[test]
    fn test_permission_cached_once() {
        let mut session = SessionContext::default();
        assert_eq!(session.cached_permission(Permission::OrdersEdit), None);

        session.cache_permission(Permission::OrdersEdit, false);
        session.cache_permission(Permission::OrdersEdit, true);

        assert_eq!(session.cached_permission(Permission::OrdersEdit), Some(false));
    }

    #[test]
    fn test_changing_user_clears_permission_cache() {
        let mut session = SessionContext::default().with_user(user("anna"));
        session.cache_permission(Permission::OrdersEdit, true);

        session.set_user(Some(user("anna")));
        assert_eq!(session.cached_permission(Permission::OrdersEdit), Some(true));

        session.set_user(Some(user("bertil")));
        assert_eq!(session.cached_permission(Permission::OrdersEdit), None);
        assert_eq!(session.user_id(), Some("bertil"));
    }
}
