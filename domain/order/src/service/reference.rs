use async_trait::async_trait;

use crate::model::{
    entity::{OrderStatus, OrderType, Utility},
    vo::{DatabaseTranslation, FormReferences, ReferenceSet, UtilityScope},
};

/// Reference projections, translated for the active language.
#[async_trait]
pub trait ReferenceDataService: Send + Sync {
    /// Every projection offered by the create order form.
    ///
    /// Facilities and checklists are empty in the global scope.
    async fn form_references(
        &self,
        scope: &UtilityScope,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<FormReferences>;

    async fn get_utilities(
        &self,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<ReferenceSet<Utility>>;

    async fn get_order_types(
        &self,
        scope: &UtilityScope,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<ReferenceSet<OrderType>>;

    async fn get_order_statuses(
        &self,
        scope: &UtilityScope,
        translation: &DatabaseTranslation,
    ) -> anyhow::Result<ReferenceSet<OrderStatus>>;
}
