use async_trait::async_trait;

use crate::model::{
    entity::Facility,
    vo::{ReferenceSet, UtilityScope},
};

#[async_trait]
pub trait FacilityRepo: Send + Sync {
    async fn get_all_facilities(&self, scope: &UtilityScope)
        -> anyhow::Result<ReferenceSet<Facility>>;
}
