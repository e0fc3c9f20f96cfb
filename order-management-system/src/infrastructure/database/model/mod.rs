pub mod checklist;
pub mod facility;
pub mod location;
pub mod order;
pub mod order_status;
pub mod order_type;
pub mod user;
pub mod utility;

pub mod prelude {
    #[rustfmt::skip]
    pub use super::{
        checklist::Entity as Checklist,
        facility::Entity as Facility,
        location::Entity as Location,
        order::Entity as Order,
        order_status::Entity as OrderStatus,
        order_type::Entity as OrderType,
        user::Entity as User,
        utility::Entity as Utility,
    };
}
