use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "utility")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub utility_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain_order::model::entity::Utility {
    fn from(model: Model) -> Self {
        Self {
            utility_id: model.utility_id,
            name: model.name,
            description: model.description,
        }
    }
}
