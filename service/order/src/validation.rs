use std::fmt::Display;

use domain_order::model::vo::{FormField, ValidationErrors, ValidationMessages};

/// Checks the scheduled time window of the create order form.
///
/// Both bounds are optional, but when one is given the other must be too and
/// the start must be strictly before the end.
pub fn validate<T>(
    start_time: Option<T>,
    end_time: Option<T>,
    messages: &ValidationMessages,
) -> ValidationErrors
where
    T: PartialOrd + Display,
{
    let mut errors = ValidationErrors::new();
    match (start_time, end_time) {
        (None, None) => {}
        (None, Some(_)) => {
            errors.add(FormField::ScheduledStartTime, &messages.start_time_no_end_time);
        }
        (Some(_), None) => {
            errors.add(FormField::ScheduledEndTime, &messages.end_time_no_start_time);
        }
        (Some(start), Some(end)) if start >= end => {
            errors.add(
                FormField::ScheduledStartTime,
                messages.start_time_geq_end_time(&start, &end),
            );
        }
        (Some(_), Some(_)) => {}
    }
    errors
}

/// Order type and order status have no default and must be selected.
pub fn validate_required(
    order_type_id: Option<i32>,
    order_status_id: Option<i32>,
    messages: &ValidationMessages,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if order_type_id.is_none() {
        errors.add(FormField::OrderType, &messages.order_type_missing);
    }
    if order_status_id.is_none() {
        errors.add(FormField::OrderStatus, &messages.order_status_missing);
    }
    errors
}
