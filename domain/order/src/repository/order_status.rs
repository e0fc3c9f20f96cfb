use async_trait::async_trait;

use crate::model::{
    entity::OrderStatus,
    vo::{ReferenceSet, TranslationMapping, UtilityScope},
};

#[async_trait]
pub trait OrderStatusRepo: Send + Sync {
    /// Order statuses visible in `scope`, ordered by id, labels replaced from `translation`.
    async fn get_all_order_statuses(
        &self,
        scope: &UtilityScope,
        translation: &TranslationMapping,
    ) -> anyhow::Result<ReferenceSet<OrderStatus>>;
}
