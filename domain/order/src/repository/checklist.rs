use async_trait::async_trait;

use crate::model::{
    entity::Checklist,
    vo::{ReferenceSet, UtilityScope},
};

#[async_trait]
pub trait ChecklistRepo: Send + Sync {
    async fn get_all_checklists(
        &self,
        scope: &UtilityScope,
    ) -> anyhow::Result<ReferenceSet<Checklist>>;
}
