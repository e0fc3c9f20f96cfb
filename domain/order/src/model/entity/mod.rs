mod checklist;
mod facility;
mod location;
mod order;
mod order_status;
mod order_type;
mod user;
mod utility;

#[rustfmt::skip]
pub use {
    checklist::Checklist,
    facility::Facility,
    location::Location,
    order::Order,
    order_status::OrderStatus,
    order_type::OrderType,
    user::{Role, User},
    utility::Utility,
};
