use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Id to display label, used to replace the labels of default rows with the
/// ones of the active language.
pub type TranslationMapping<K = i32> = HashMap<K, String>;

/// A row of a reference table that can be offered in a selection field.
pub trait Reference {
    type Id: Clone + Eq + Hash + Display + Serialize;

    fn id(&self) -> Self::Id;
    fn display_label(&self) -> String;
}

/// A reference row whose label is subject to translation.
pub trait Translatable: Reference {
    fn relabel(&mut self, label: &str);
}

/// An ordered, id-indexed, read-only projection of a reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSet<T> {
    items: Vec<T>,
}

/// A single option of a selection field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption<Id> {
    pub value: Id,
    pub label: String,
}

impl<T> Default for ReferenceSet<T> {
    fn default() -> Self {
        Self { items: vec![] }
    }
}

impl<T: Reference> ReferenceSet<T> {
    /// Keeps `items` in the given order; the first occurrence of an id wins.
    pub fn new(items: Vec<T>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let items = items.into_iter().filter(|el| seen.insert(el.id())).collect();
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|el| &el.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(Reference::id).collect()
    }

    /// The label of the row with `id`.
    pub fn display_row(&self, id: &T::Id) -> Option<String> {
        self.get(id).map(Reference::display_label)
    }

    pub fn options(&self) -> Vec<SelectOption<T::Id>> {
        self.items
            .iter()
            .map(|el| SelectOption {
                value: el.id(),
                label: el.display_label(),
            })
            .collect()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Translatable> ReferenceSet<T> {
    /// Replaces the labels of the rows found in `translation`, other rows keep their label.
    pub fn translate(mut self, translation: &TranslationMapping<T::Id>) -> Self {
        if translation.is_empty() {
            return self;
        }
        for item in self.items.iter_mut() {
            if let Some(label) = translation.get(&item.id()) {
                item.relabel(label);
            }
        }
        self
    }
}

impl<T: Reference> FromIterator<T> for ReferenceSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::{Facility, OrderType};

    fn order_types() -> ReferenceSet<OrderType> {
        ReferenceSet::new(vec![
            OrderType {
                order_type_id: 1,
                name: "Meter change".to_string(),
                description: None,
                utility_id: None,
            },
            OrderType {
                order_type_id: 2,
                name: "Meter inspection".to_string(),
                description: None,
                utility_id: None,
            },
            OrderType {
                order_type_id: 7,
                name: "Sealing".to_string(),
                description: None,
                utility_id: Some(1),
            },
        ])
    }

    #[test]
    fn test_translate_only_mapped_ids() {
        let translation = TranslationMapping::from([
            (1, "Mätarbyte".to_string()),
            (2, "Mätarkontroll".to_string()),
            (99, "Unused".to_string()),
        ]);

        let translated = order_types().translate(&translation);

        assert_eq!(translated.display_row(&1).as_deref(), Some("Mätarbyte"));
        assert_eq!(translated.display_row(&2).as_deref(), Some("Mätarkontroll"));
        assert_eq!(translated.display_row(&7).as_deref(), Some("Sealing"));
        assert_eq!(translated.len(), 3);
        assert!(!translated.contains(&99));
    }

    #[test]
    fn test_keeps_order_and_first_duplicate() {
        let mut items = order_types().into_inner();
        items.push(OrderType {
            order_type_id: 1,
            name: "Duplicate".to_string(),
            description: None,
            utility_id: None,
        });

        let set = ReferenceSet::new(items);

        assert_eq!(set.ids(), vec![1, 2, 7]);
        assert_eq!(set.display_row(&1).as_deref(), Some("Meter change"));
    }

    #[test]
    fn test_facility_options() {
        let facilities = ReferenceSet::new(vec![Facility {
            facility_id: 3,
            ean: 735999000000000017,
            address: "Storgatan 1".to_string(),
            utility_id: Some(1),
        }]);

        let options = facilities.options();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, 3);
        assert_eq!(options[0].label, "735999000000000017 | Storgatan 1");
    }

    #[test]
    fn test_empty_set() {
        let set = ReferenceSet::<OrderType>::empty();

        assert!(set.is_empty());
        assert!(set.options().is_empty());
        assert_eq!(set.display_row(&1), None);
    }
}
