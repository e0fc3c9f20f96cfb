use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// The fields of the create order form that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    OrderType,
    OrderStatus,
    ScheduledStartTime,
    ScheduledEndTime,
}

/// Field to message, at most one message per field. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the message already attached to `field`, if any.
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        if let btree_map::Entry::Vacant(entry) = self.0.entry(field) {
            entry.insert(message.into());
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (FormField, String);
    type IntoIter = btree_map::IntoIter<FormField, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
