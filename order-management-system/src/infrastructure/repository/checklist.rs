use async_trait::async_trait;
use domain_order::{
    model::{
        entity::Checklist,
        vo::{ReferenceSet, UtilityScope},
    },
    repository::ChecklistRepo,
};
use sea_orm::{prelude::*, QueryOrder};

use super::scope_condition;
use crate::infrastructure::database::{model::checklist, OrmRepo};

#[async_trait]
impl ChecklistRepo for OrmRepo {
    async fn get_all_checklists(
        &self,
        scope: &UtilityScope,
    ) -> anyhow::Result<ReferenceSet<Checklist>> {
        Ok(checklist::Entity::find()
            .filter(scope_condition(checklist::Column::UtilityId, scope))
            .order_by_asc(checklist::Column::ChecklistId)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Checklist::from)
            .collect())
    }
}
