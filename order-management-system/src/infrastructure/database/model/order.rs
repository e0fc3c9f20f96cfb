use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_id: i32,
    pub order_type_id: i32,
    pub order_status_id: i32,
    pub facility_id: Option<i32>,
    pub location_id: Option<i32>,
    pub checklist_id: Option<i32>,
    pub technician_id: Option<String>,
    pub ext_id: Option<String>,
    pub scheduled_start_at: Option<DateTimeUtc>,
    pub scheduled_end_at: Option<DateTimeUtc>,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain_order::model::entity::Order {
    fn from(model: Model) -> Self {
        Self {
            order_id: Some(model.order_id),
            order_type_id: model.order_type_id,
            order_status_id: model.order_status_id,
            facility_id: model.facility_id,
            location_id: model.location_id,
            checklist_id: model.checklist_id,
            technician_id: model.technician_id,
            ext_id: model.ext_id,
            scheduled_start_at: model.scheduled_start_at,
            scheduled_end_at: model.scheduled_end_at,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}
