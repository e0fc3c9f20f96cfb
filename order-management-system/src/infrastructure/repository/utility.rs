use async_trait::async_trait;
use domain_order::{
    model::{
        entity::Utility,
        vo::{ReferenceSet, TranslationMapping},
    },
    repository::UtilityRepo,
};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{model::utility, OrmRepo};

#[async_trait]
impl UtilityRepo for OrmRepo {
    async fn get_all_utilities(
        &self,
        translation: &TranslationMapping,
    ) -> anyhow::Result<ReferenceSet<Utility>> {
        let utilities = utility::Entity::find()
            .order_by_asc(utility::Column::UtilityId)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Utility::from)
            .collect::<ReferenceSet<_>>();
        Ok(utilities.translate(translation))
    }
}
