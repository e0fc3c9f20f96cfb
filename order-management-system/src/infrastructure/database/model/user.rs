use anyhow::anyhow;
use domain_order::model::entity::Role;
use num_traits::FromPrimitive;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub displayname: String,
    /// See [`Role`], stored as its number.
    pub role: i32,
    pub is_technician: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for domain_order::model::entity::User {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = Role::from_i32(model.role)
            .ok_or(anyhow!("User {} has unknown role: {}.", model.user_id, model.role))?;
        Ok(Self {
            user_id: model.user_id,
            username: model.username,
            displayname: model.displayname,
            role,
            is_technician: model.is_technician,
        })
    }
}
