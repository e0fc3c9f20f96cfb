use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Narrows which reference rows are offered.
///
/// `Global` offers only the rows shared by every utility, `Utilities` offers
/// the shared rows plus the rows of any of the given utilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UtilityScope {
    #[default]
    Global,
    Utilities(BTreeSet<i32>),
}

impl UtilityScope {
    /// An empty set of ids is the global scope.
    pub fn new(utility_ids: impl IntoIterator<Item = i32>) -> Self {
        let ids = utility_ids.into_iter().collect::<BTreeSet<_>>();
        if ids.is_empty() {
            Self::Global
        } else {
            Self::Utilities(ids)
        }
    }

    pub fn from_selected(utility_id: Option<i32>) -> Self {
        Self::new(utility_id)
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }

    pub fn utility_ids(&self) -> Option<&BTreeSet<i32>> {
        match self {
            Self::Global => None,
            Self::Utilities(ids) => Some(ids),
        }
    }

    /// Whether a row scoped to `utility_id` is visible in this scope.
    pub fn admits(&self, utility_id: Option<i32>) -> bool {
        match (self, utility_id) {
            (_, None) => true,
            (Self::Global, Some(_)) => false,
            (Self::Utilities(ids), Some(id)) => ids.contains(&id),
        }
    }
}
