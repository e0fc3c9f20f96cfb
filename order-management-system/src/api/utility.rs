use actix_web::{get, web, HttpRequest};
use domain_order::model::{entity::Utility, vo::ReferenceSet};

use super::{open_session, OrderResponder, OrderResponderResult};
use crate::infrastructure::ServiceProvider;

#[tracing::instrument(skip(sp, req))]
#[get("utility/GetUtilities")]
pub async fn get_utilities(
    sp: web::Data<ServiceProvider>,
    req: HttpRequest,
) -> OrderResponderResult<ReferenceSet<Utility>> {
    let services = sp.scoped();
    let (session_id, session) = open_session(&req, &sp, services.user_repo.as_ref()).await?;
    let bundle = sp.translation_service().load(session.language())?;
    let content = services
        .reference_data_service
        .get_utilities(&bundle.database)
        .await?;
    Ok(OrderResponder {
        session_id,
        content,
    })
}
