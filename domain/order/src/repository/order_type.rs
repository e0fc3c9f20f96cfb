use async_trait::async_trait;

use crate::model::{
    entity::OrderType,
    vo::{ReferenceSet, TranslationMapping, UtilityScope},
};

#[async_trait]
pub trait OrderTypeRepo: Send + Sync {
    /// Order types visible in `scope`, ordered by id, labels replaced from `translation`.
    async fn get_all_order_types(
        &self,
        scope: &UtilityScope,
        translation: &TranslationMapping,
    ) -> anyhow::Result<ReferenceSet<OrderType>>;
}
