use actix_web::{get, post, web, HttpRequest};
use domain_order::{
    command::CreateOrderCommand,
    model::{
        entity::{OrderStatus, OrderType},
        vo::{FormSubmission, OrderFormView, ReferenceSet},
    },
};

use super::{
    dtos::{CreateOrderFormQuery, UtilityIdsQuery},
    open_session, OrderResponder, OrderResponderResult,
};
use crate::infrastructure::ServiceProvider;

#[tracing::instrument(skip(sp, req))]
#[get("order/CreateOrderForm")]
pub async fn create_order_form(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
    query: web::Query<CreateOrderFormQuery>,
) -> OrderResponderResult<OrderFormView> {
    let services = sp.scoped();
    let (session_id, mut session) = open_session(&req, &sp, services.user_repo.as_ref()).await?;
    let content = services
        .form_service
        .render(query.utility_id, &mut session)
        .await?;
    Ok(OrderResponder {
        session_id,
        content,
    })
}

#[tracing::instrument(skip(sp, req, command))]
#[post("order/CreateOrder")]
pub async fn create_order(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
    command: web::Json<CreateOrderCommand>,
) -> OrderResponderResult<FormSubmission> {
    let services = sp.scoped();
    let (session_id, mut session) = open_session(&req, &sp, services.user_repo.as_ref()).await?;
    let content = services
        .form_service
        .submit(command.into_inner(), &mut session)
        .await?;
    Ok(OrderResponder {
        session_id,
        content,
    })
}

#[tracing::instrument(skip(sp, req))]
#[get("order/GetOrderTypes")]
pub async fn get_order_types(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
    query: web::Query<UtilityIdsQuery>,
) -> OrderResponderResult<ReferenceSet<OrderType>> {
    let scope = query.scope()?;
    let services = sp.scoped();
    let (session_id, session) = open_session(&req, &sp, services.user_repo.as_ref()).await?;
    let bundle = sp.translation_service().load(session.language())?;
    let content = services
        .reference_data_service
        .get_order_types(&scope, &bundle.database)
        .await?;
    Ok(OrderResponder {
        session_id,
        content,
    })
}

#[tracing::instrument(skip(sp, req))]
#[get("order/GetOrderStatuses")]
pub async fn get_order_statuses(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
    query: web::Query<UtilityIdsQuery>,
) -> OrderResponderResult<ReferenceSet<OrderStatus>> {
    let scope = query.scope()?;
    let services = sp.scoped();
    let (session_id, session) = open_session(&req, &sp, services.user_repo.as_ref()).await?;
    let bundle = sp.translation_service().load(session.language())?;
    let content = services
        .reference_data_service
        .get_order_statuses(&scope, &bundle.database)
        .await?;
    Ok(OrderResponder {
        session_id,
        content,
    })
}
