use async_trait::async_trait;

use crate::{
    command::CreateOrderCommand,
    exception::OrderResult,
    model::vo::{FormSubmission, OrderFormView, SessionContext},
};

/// Renders the create order form and handles its submission.
#[async_trait]
pub trait OrderFormService: Send + Sync {
    /// Renders the form for the selected utility, draining the pending errors of the session.
    async fn render(
        &self,
        utility_id: Option<i32>,
        session: &mut SessionContext,
    ) -> OrderResult<OrderFormView>;

    /// Validates the submitted form and, when valid, persists the order.
    async fn submit(
        &self,
        command: CreateOrderCommand,
        session: &mut SessionContext,
    ) -> OrderResult<FormSubmission>;
}
