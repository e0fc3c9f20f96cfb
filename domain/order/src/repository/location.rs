use async_trait::async_trait;

use crate::model::{entity::Location, vo::ReferenceSet};

#[async_trait]
pub trait LocationRepo: Send + Sync {
    async fn get_all_locations(&self) -> anyhow::Result<ReferenceSet<Location>>;
}
