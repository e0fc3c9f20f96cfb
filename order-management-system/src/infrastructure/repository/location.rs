use async_trait::async_trait;
use domain_order::{
    model::{entity::Location, vo::ReferenceSet},
    repository::LocationRepo,
};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{model::location, OrmRepo};

#[async_trait]
impl LocationRepo for OrmRepo {
    async fn get_all_locations(&self) -> anyhow::Result<ReferenceSet<Location>> {
        Ok(location::Entity::find()
            .order_by_asc(location::Column::LocationId)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Location::from)
            .collect())
    }
}
