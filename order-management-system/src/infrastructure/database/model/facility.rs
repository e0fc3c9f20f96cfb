use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "facility")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub facility_id: i32,
    #[sea_orm(unique)]
    pub ean: i64,
    pub address: String,
    pub utility_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain_order::model::entity::Facility {
    fn from(model: Model) -> Self {
        Self {
            facility_id: model.facility_id,
            ean: model.ean,
            address: model.address,
            utility_id: model.utility_id,
        }
    }
}
