mod checklist;
mod facility;
mod location;
mod order;
mod order_status;
mod order_type;
mod user;
mod utility;

use async_trait::async_trait;

#[rustfmt::skip]
pub use {
    checklist::ChecklistRepo,
    facility::FacilityRepo,
    location::LocationRepo,
    order::OrderRepo,
    order_status::OrderStatusRepo,
    order_type::OrderTypeRepo,
    user::UserRepo,
    utility::UtilityRepo,
};

/// A repository that queues changes until they are saved in one transaction.
#[async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Queues an insert of `entity`.
    async fn insert(&self, entity: &T) -> anyhow::Result<()>;

    /// Commits every queued change at once. On error nothing is persisted.
    async fn save_changed(&self) -> anyhow::Result<bool>;

    /// Discards the queued changes.
    async fn rollback(&self) -> anyhow::Result<()>;
}
