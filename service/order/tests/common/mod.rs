#![allow(dead_code)]

use std::sync::Arc;

use domain_order::model::{
    entity::{OrderStatus, OrderType, Role, User},
    vo::{ReferenceSet, TranslationBundle, ValidationMessages},
};
use serde_json::json;

pub fn bundle() -> Arc<TranslationBundle> {
    let bundle = json!({
        "database": {
            "order_type": { "1": { "name": "Mätarbyte" } },
            "order_status": {},
            "utility": {}
        },
        "order": {
            "page_title": "Orders",
            "create_order_button": { "label": "Create order", "help_text": null },
            "create_order_form": {
                "title": "Create order",
                "order_type_id_label": "Order type",
                "order_type_id_placeholder": "Select order type",
                "order_status_id_label": "Order status",
                "order_status_id_placeholder": "Select order status",
                "facility_id_label": "Facility",
                "facility_id_placeholder": "Select facility",
                "location_id_label": "Location",
                "location_id_placeholder": "Select location",
                "checklist_id_label": "Checklist",
                "checklist_id_placeholder": "Select checklist",
                "ext_id_label": "External id",
                "ext_id_placeholder": "Enter external id",
                "technician_id_label": "Technician",
                "technician_id_placeholder": "Select technician",
                "scheduled_date": "Date",
                "scheduled_start_at": "Start time",
                "scheduled_end_at": "End time",
                "submit_button_label": "Create",
                "validation_messages": {
                    "start_time_no_end_time": "Start time missing while end time given.",
                    "end_time_no_start_time": "End time missing while start time given.",
                    "start_time_geq_end_time": "Start time ({start_time}) must be earlier than end time ({end_time}).",
                    "order_type_missing": "Select an order type.",
                    "order_status_missing": "Select an order status."
                }
            }
        }
    });
    Arc::new(serde_json::from_value(bundle).unwrap())
}

pub fn messages() -> ValidationMessages {
    bundle().order.create_order_form.validation_messages.clone()
}

pub fn user(role: Role) -> User {
    User {
        user_id: "user-1".to_string(),
        username: "anna".to_string(),
        displayname: "Anna Andersson".to_string(),
        role,
        is_technician: false,
    }
}

pub fn order_types() -> ReferenceSet<OrderType> {
    ReferenceSet::new(vec![
        OrderType {
            order_type_id: 1,
            name: "Meter change".to_string(),
            description: None,
            utility_id: None,
        },
        OrderType {
            order_type_id: 3,
            name: "Sealing".to_string(),
            description: None,
            utility_id: Some(1),
        },
    ])
}

pub fn order_statuses() -> ReferenceSet<OrderStatus> {
    ReferenceSet::new(vec![OrderStatus {
        order_status_id: 1,
        name: "New".to_string(),
        description: None,
        utility_id: None,
    }])
}
