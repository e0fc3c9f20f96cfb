use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_type_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Null for the defaults shared by every utility.
    pub utility_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain_order::model::entity::OrderType {
    fn from(model: Model) -> Self {
        Self {
            order_type_id: model.order_type_id,
            name: model.name,
            description: model.description,
            utility_id: model.utility_id,
        }
    }
}
