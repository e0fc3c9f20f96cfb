use serde::{Deserialize, Serialize};

use super::{
    CreateOrderFormTranslation, FormField, FormKey, OperationResult, Reference, ReferenceSet,
    SelectOption, ValidationErrors,
};
use crate::model::entity::{Checklist, Facility, Location, OrderStatus, OrderType, User};

/// The reference projections offered by the create order form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormReferences {
    pub order_types: ReferenceSet<OrderType>,
    pub order_statuses: ReferenceSet<OrderStatus>,
    pub facilities: ReferenceSet<Facility>,
    pub locations: ReferenceSet<Location>,
    pub checklists: ReferenceSet<Checklist>,
    pub technicians: ReferenceSet<User>,
}

/// A selection field. An empty field is disabled, never left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField<Id> {
    pub label: String,
    pub placeholder: String,
    pub options: Vec<SelectOption<Id>>,
    pub selected: Option<Id>,
    pub disabled: bool,
    /// Validation message shown above the field.
    pub banner: Option<String>,
}

impl<Id: Clone> SelectField<Id> {
    /// `preselect_first` selects the first option, used by the required fields.
    pub fn from_reference_set<T>(
        label: &str,
        placeholder: &str,
        set: &ReferenceSet<T>,
        preselect_first: bool,
    ) -> Self
    where
        T: Reference<Id = Id>,
    {
        let options = set.options();
        let selected = if preselect_first {
            options.first().map(|el| el.value.clone())
        } else {
            None
        };
        Self {
            label: label.to_owned(),
            placeholder: placeholder.to_owned(),
            disabled: options.is_empty(),
            options,
            selected,
            banner: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    pub label: String,
    pub placeholder: String,
}

/// A date or time input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub label: String,
    pub banner: Option<String>,
}

impl InputField {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            banner: None,
        }
    }
}

/// Everything a client needs to draw the create order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormView {
    pub form_key: FormKey,
    pub title: String,
    pub utility_id: Option<i32>,
    pub order_type: SelectField<i32>,
    pub order_status: SelectField<i32>,
    pub facility: SelectField<i32>,
    pub location: SelectField<i32>,
    pub checklist: SelectField<i32>,
    pub ext_id: TextField,
    pub technician: SelectField<String>,
    pub scheduled_date: InputField,
    pub scheduled_start_time: InputField,
    pub scheduled_end_time: InputField,
    pub submit_label: String,
    /// False when no utility is selected or the user may not create orders.
    pub create_enabled: bool,
}

impl OrderFormView {
    pub fn build(
        form_key: &FormKey,
        translation: &CreateOrderFormTranslation,
        references: &FormReferences,
        utility_id: Option<i32>,
        create_enabled: bool,
    ) -> Self {
        let t = translation;
        Self {
            form_key: form_key.clone(),
            title: t.title.to_owned(),
            utility_id,
            order_type: SelectField::from_reference_set(
                &t.order_type_id_label,
                &t.order_type_id_placeholder,
                &references.order_types,
                true,
            ),
            order_status: SelectField::from_reference_set(
                &t.order_status_id_label,
                &t.order_status_id_placeholder,
                &references.order_statuses,
                true,
            ),
            facility: SelectField::from_reference_set(
                &t.facility_id_label,
                &t.facility_id_placeholder,
                &references.facilities,
                false,
            ),
            location: SelectField::from_reference_set(
                &t.location_id_label,
                &t.location_id_placeholder,
                &references.locations,
                false,
            ),
            checklist: SelectField::from_reference_set(
                &t.checklist_id_label,
                &t.checklist_id_placeholder,
                &references.checklists,
                false,
            ),
            ext_id: TextField {
                label: t.ext_id_label.to_owned(),
                placeholder: t.ext_id_placeholder.to_owned(),
            },
            technician: SelectField::from_reference_set(
                &t.technician_id_label,
                &t.technician_id_placeholder,
                &references.technicians,
                false,
            ),
            scheduled_date: InputField::new(&t.scheduled_date),
            scheduled_start_time: InputField::new(&t.scheduled_start_at),
            scheduled_end_time: InputField::new(&t.scheduled_end_at),
            submit_label: t.submit_button_label.to_owned(),
            create_enabled,
        }
    }

    /// Puts each message into the banner slot of its field.
    pub fn apply_errors(&mut self, errors: ValidationErrors) {
        for (field, message) in errors {
            let banner = match field {
                FormField::OrderType => &mut self.order_type.banner,
                FormField::OrderStatus => &mut self.order_status.banner,
                FormField::ScheduledStartTime => &mut self.scheduled_start_time.banner,
                FormField::ScheduledEndTime => &mut self.scheduled_end_time.banner,
            };
            *banner = Some(message);
        }
    }

    pub fn banner(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::OrderType => self.order_type.banner.as_deref(),
            FormField::OrderStatus => self.order_status.banner.as_deref(),
            FormField::ScheduledStartTime => self.scheduled_start_time.banner.as_deref(),
            FormField::ScheduledEndTime => self.scheduled_end_time.banner.as_deref(),
        }
    }

    pub fn has_errors(&self) -> bool {
        [
            FormField::OrderType,
            FormField::OrderStatus,
            FormField::ScheduledStartTime,
            FormField::ScheduledEndTime,
        ]
        .into_iter()
        .any(|field| self.banner(field).is_some())
    }
}

/// The outcome of submitting the create order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum FormSubmission {
    /// Validation failed, the form is returned with its error banners.
    Invalid { view: Box<OrderFormView> },
    /// The order was handed to the store, `result` tells whether it was saved.
    Completed { result: OperationResult },
}
