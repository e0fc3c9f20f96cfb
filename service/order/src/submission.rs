use std::sync::Arc;

use async_trait::async_trait;
use domain_order::{
    model::{entity::Order, vo::OperationResult},
    repository::OrderRepo,
    service::OrderSubmissionService,
};
use typed_builder::TypedBuilder;

/// Shown to the user when an order could not be saved.
pub const COMMIT_ERROR_MESSAGE: &str = "Error committing transaction!";

#[derive(TypedBuilder)]
pub struct OrderSubmissionServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
}

impl OrderSubmissionServiceImpl {
    async fn persist(&self, order: &Order) -> anyhow::Result<()> {
        self.order_repo.insert(order).await?;
        self.order_repo.save_changed().await?;
        Ok(())
    }
}

#[async_trait]
impl OrderSubmissionService for OrderSubmissionServiceImpl {
    async fn submit(&self, order: Order) -> OperationResult {
        match self.persist(&order).await {
            Ok(()) => OperationResult::success(),
            Err(e) => {
                if let Err(rollback_error) = self.order_repo.rollback().await {
                    tracing::error!("Rollback after failed commit failed: {rollback_error}");
                }
                let long_msg = format!("{COMMIT_ERROR_MESSAGE}\n{e}");
                tracing::error!("{long_msg}");
                OperationResult::failure(COMMIT_ERROR_MESSAGE, long_msg)
            }
        }
    }
}
