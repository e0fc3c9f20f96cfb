use async_trait::async_trait;

use crate::model::{entity::Order, vo::OperationResult};

/// Persists a validated order in one transaction.
#[async_trait]
pub trait OrderSubmissionService: Send + Sync {
    /// Never fails, a persistence failure is rolled back and reported in the result.
    async fn submit(&self, order: Order) -> OperationResult;
}
