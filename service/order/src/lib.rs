mod form;
mod permission;
mod reference;
mod schedule;
mod submission;
mod validation;

#[rustfmt::skip]
pub use {
    form::OrderFormServiceImpl,
    permission::PermissionServiceImpl,
    reference::ReferenceDataServiceImpl,
    schedule::localize,
    submission::{OrderSubmissionServiceImpl, COMMIT_ERROR_MESSAGE},
    validation::{validate, validate_required},
};
