use async_trait::async_trait;

use crate::model::{
    entity::Utility,
    vo::{ReferenceSet, TranslationMapping},
};

#[async_trait]
pub trait UtilityRepo: Send + Sync {
    async fn get_all_utilities(
        &self,
        translation: &TranslationMapping,
    ) -> anyhow::Result<ReferenceSet<Utility>>;
}
