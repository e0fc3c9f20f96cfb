mod form;
mod permission;
mod reference;
mod submission;
mod translation;

#[rustfmt::skip]
pub use {
    form::OrderFormService,
    permission::PermissionService,
    reference::ReferenceDataService,
    submission::OrderSubmissionService,
    translation::TranslationService,
};
