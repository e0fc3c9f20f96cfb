use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "checklist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub checklist_id: i32,
    pub name: String,
    pub utility_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain_order::model::entity::Checklist {
    fn from(model: Model) -> Self {
        Self {
            checklist_id: model.checklist_id,
            name: model.name,
            utility_id: model.utility_id,
        }
    }
}
