use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::TranslationMapping;

/// Every display string of the application in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationBundle {
    pub database: DatabaseTranslation,
    pub order: OrderTranslation,
}

/// Translations of the default rows of the reference tables, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTranslation {
    #[serde(default)]
    pub order_type: HashMap<i32, NamedTranslation>,
    #[serde(default)]
    pub order_status: HashMap<i32, NamedTranslation>,
    #[serde(default)]
    pub utility: HashMap<i32, NamedTranslation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTranslation {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTranslation {
    pub page_title: String,
    pub create_order_button: ButtonTranslation,
    pub create_order_form: CreateOrderFormTranslation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonTranslation {
    pub label: String,
    pub help_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderFormTranslation {
    pub title: String,
    pub order_type_id_label: String,
    pub order_type_id_placeholder: String,
    pub order_status_id_label: String,
    pub order_status_id_placeholder: String,
    pub facility_id_label: String,
    pub facility_id_placeholder: String,
    pub location_id_label: String,
    pub location_id_placeholder: String,
    pub checklist_id_label: String,
    pub checklist_id_placeholder: String,
    pub ext_id_label: String,
    pub ext_id_placeholder: String,
    pub technician_id_label: String,
    pub technician_id_placeholder: String,
    pub scheduled_date: String,
    pub scheduled_start_at: String,
    pub scheduled_end_at: String,
    pub submit_button_label: String,
    pub validation_messages: ValidationMessages,
}

/// Message templates of the create order form validation.
///
/// `start_time_geq_end_time` may reference `{start_time}` and `{end_time}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessages {
    pub start_time_no_end_time: String,
    pub end_time_no_start_time: String,
    pub start_time_geq_end_time: String,
    pub order_type_missing: String,
    pub order_status_missing: String,
}

impl ValidationMessages {
    pub fn start_time_geq_end_time(
        &self,
        start_time: impl std::fmt::Display,
        end_time: impl std::fmt::Display,
    ) -> String {
        self.start_time_geq_end_time
            .replace("{start_time}", &start_time.to_string())
            .replace("{end_time}", &end_time.to_string())
    }
}

/// Id to label mapping of the names in `translation`.
pub fn create_translation_mapping(
    translation: &HashMap<i32, NamedTranslation>,
) -> TranslationMapping {
    translation.iter().map(|(id, el)| (*id, el.name.to_owned())).collect()
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_database_translation_from_json() {
        let json = indoc! {r#"
            {
                "order_type": {
                    "1": { "name": "Mätarbyte", "description": "Byte av mätare" },
                    "2": { "name": "Mätarkontroll" }
                },
                "utility": {
                    "1": { "name": "El" }
                }
            }
        "#};

        let translation: DatabaseTranslation = serde_json::from_str(json).unwrap();
        let mapping = create_translation_mapping(&translation.order_type);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping[&1], "Mätarbyte");
        assert_eq!(mapping[&2], "Mätarkontroll");
        assert!(translation.order_status.is_empty());
        assert_eq!(translation.utility[&1].description, None);
    }

    #[test]
    fn test_start_time_geq_end_time_template() {
        let messages = ValidationMessages {
            start_time_no_end_time: String::new(),
            end_time_no_start_time: String::new(),
            start_time_geq_end_time: "Start ({start_time}) must be before end ({end_time})!"
                .to_string(),
            order_type_missing: String::new(),
            order_status_missing: String::new(),
        };

        assert_eq!(
            messages.start_time_geq_end_time("09:00", "08:00"),
            "Start (09:00) must be before end (08:00)!"
        );
    }
}
