mod checklist;
mod facility;
mod location;
mod order;
mod order_status;
mod order_type;
mod user;
mod utility;

use domain_order::model::vo::UtilityScope;
use sea_orm::{ColumnTrait, Condition};

/// Rows shared by every utility, plus the rows of the utilities in `scope`.
pub(crate) fn scope_condition<C: ColumnTrait>(column: C, scope: &UtilityScope) -> Condition {
    match scope.utility_ids() {
        None => Condition::all().add(column.is_null()),
        Some(ids) => Condition::any()
            .add(column.is_in(ids.iter().copied()))
            .add(column.is_null()),
    }
}
