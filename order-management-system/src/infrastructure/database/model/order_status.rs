use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_status_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub utility_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain_order::model::entity::OrderStatus {
    fn from(model: Model) -> Self {
        Self {
            order_status_id: model.order_status_id,
            name: model.name,
            description: model.description,
            utility_id: model.utility_id,
        }
    }
}
