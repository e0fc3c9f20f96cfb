use async_trait::async_trait;

use crate::model::{entity::User, vo::ReferenceSet};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Users flagged as technician, ordered by display name.
    async fn get_all_technicians(&self) -> anyhow::Result<ReferenceSet<User>>;

    async fn get_by_id(&self, user_id: &str) -> anyhow::Result<Option<User>>;
}
