use actix_web::{post, web, HttpRequest, HttpResponse};

use super::{header, ResponseBase, SESSION_HEADER};
use crate::infrastructure::ServiceProvider;

/// Forgets the session named by the request, including its pending form errors.
#[tracing::instrument(skip(sp, req))]
#[post("session/Close")]
pub async fn close_session(sp: web::Data<ServiceProvider>, req: HttpRequest) -> HttpResponse {
    let closed = header(&req, SESSION_HEADER)
        .map(|session_id| sp.session_store().remove(session_id))
        .unwrap_or_default();
    HttpResponse::Ok().json(ResponseBase::ok(closed))
}
