mod form_view;
mod language;
mod operation_result;
mod permission;
mod reference_set;
mod session;
mod translation;
mod utility_scope;
mod validation;

#[rustfmt::skip]
pub use {
    form_view::*,
    language::*,
    operation_result::*,
    permission::*,
    reference_set::*,
    session::*,
    translation::*,
    utility_scope::*,
    validation::*,
};
