use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Tz;
use domain_order::{
    command::CreateOrderCommand,
    exception::{OrderException, OrderResult},
    model::{
        entity::Order,
        vo::{
            FormField, FormKey, FormSubmission, OrderFormView, Permission, SessionContext,
            UtilityScope,
        },
    },
    service::{
        OrderFormService, OrderSubmissionService, PermissionService, ReferenceDataService,
        TranslationService,
    },
};
use typed_builder::TypedBuilder;

use crate::{localize, validate, validate_required};

/// The create order form as a two-phase interaction: render, then submit.
#[derive(TypedBuilder)]
pub struct OrderFormServiceImpl {
    translation_service: Arc<dyn TranslationService>,
    reference_data_service: Arc<dyn ReferenceDataService>,
    permission_service: Arc<dyn PermissionService>,
    submission_service: Arc<dyn OrderSubmissionService>,
    /// Timezone the scheduled date and times are entered in.
    timezone: Tz,
    #[builder(default = FormKey::create_order())]
    form_key: FormKey,
}

impl OrderFormServiceImpl {
    /// Builds the order from a command whose required fields are present.
    fn assemble(
        &self,
        command: CreateOrderCommand,
        order_type_id: i32,
        order_status_id: i32,
        session: &SessionContext,
    ) -> OrderResult<Order> {
        let now = Utc::now();
        let date = command
            .scheduled_date
            .unwrap_or_else(|| now.with_timezone(&self.timezone).date_naive());
        let at = |time| localize(date, time, self.timezone);
        let (scheduled_start_at, scheduled_end_at) =
            match (command.scheduled_start_time, command.scheduled_end_time) {
                (Some(start), Some(end)) => (Some(at(start)?), Some(at(end)?)),
                _ => (None, None),
            };

        Ok(Order {
            order_id: None,
            order_type_id,
            order_status_id,
            facility_id: command.facility_id,
            location_id: command.location_id,
            checklist_id: command.checklist_id,
            ext_id: command.normalized_ext_id(),
            technician_id: command.technician_id,
            scheduled_start_at,
            scheduled_end_at,
            created_by: session.user_id().map(ToOwned::to_owned),
            created_at: now,
        })
    }
}

#[async_trait]
impl OrderFormService for OrderFormServiceImpl {
    async fn render(
        &self,
        utility_id: Option<i32>,
        session: &mut SessionContext,
    ) -> OrderResult<OrderFormView> {
        let bundle = self.translation_service.load(session.language())?;
        let scope = UtilityScope::from_selected(utility_id);
        let references = self
            .reference_data_service
            .form_references(&scope, &bundle.database)
            .await?;
        let create_enabled = utility_id.is_some()
            && self.permission_service.has_permission(session, Permission::OrdersEdit);

        let mut view = OrderFormView::build(
            &self.form_key,
            &bundle.order.create_order_form,
            &references,
            utility_id,
            create_enabled,
        );
        view.apply_errors(session.take_form_errors(&self.form_key));
        Ok(view)
    }

    async fn submit(
        &self,
        command: CreateOrderCommand,
        session: &mut SessionContext,
    ) -> OrderResult<FormSubmission> {
        let permission = Permission::OrdersEdit;
        if !self.permission_service.has_permission(session, permission) {
            return Err(OrderException::PermissionDenied { permission });
        }
        if command.utility_id.is_none() {
            return Err(OrderException::UtilityNotSelected);
        }

        let bundle = self.translation_service.load(session.language())?;
        let messages = &bundle.order.create_order_form.validation_messages;
        let mut errors = validate(
            command.scheduled_start_time,
            command.scheduled_end_time,
            messages,
        );
        errors.merge(validate_required(
            command.order_type_id,
            command.order_status_id,
            messages,
        ));

        let utility_id = command.utility_id;
        let (start, end) = (command.scheduled_start_time, command.scheduled_end_time);
        if let (true, Some(order_type_id), Some(order_status_id)) =
            (errors.is_empty(), command.order_type_id, command.order_status_id)
        {
            let order = self.assemble(command, order_type_id, order_status_id, session)?;
            if order.schedule_is_consistent() {
                let result = self.submission_service.submit(order).await;
                return Ok(FormSubmission::Completed { result });
            }
            // A start inside a daylight saving gap is moved past the end.
            if let (Some(start), Some(end)) = (start, end) {
                errors.add(
                    FormField::ScheduledStartTime,
                    messages.start_time_geq_end_time(start, end),
                );
            }
        }

        tracing::debug!(
            "Form {} rejected, invalid fields: {:?}.",
            self.form_key,
            errors.fields().collect::<Vec<_>>()
        );
        session.stash_form_errors(self.form_key.clone(), errors);
        let view = self.render(utility_id, session).await?;
        Ok(FormSubmission::Invalid {
            view: Box::new(view),
        })
    }
}
