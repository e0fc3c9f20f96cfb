use async_trait::async_trait;
use domain_order::{
    model::{entity::User, vo::ReferenceSet},
    repository::UserRepo,
};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{model::user, OrmRepo};

#[async_trait]
impl UserRepo for OrmRepo {
    async fn get_all_technicians(&self) -> anyhow::Result<ReferenceSet<User>> {
        let technicians = user::Entity::find()
            .filter(user::Column::IsTechnician.eq(true))
            .order_by_asc(user::Column::Displayname)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(User::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(ReferenceSet::new(technicians))
    }

    async fn get_by_id(&self, user_id: &str) -> anyhow::Result<Option<User>> {
        user::Entity::find_by_id(user_id.to_owned())
            .one(self.db.get_connection())
            .await?
            .map(User::try_from)
            .transpose()
    }
}
