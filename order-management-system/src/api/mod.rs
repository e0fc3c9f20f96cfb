use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder, ResponseError,
};
use domain_order::{
    exception::OrderException,
    model::vo::{Language, SessionContext},
    repository::UserRepo,
};
use serde::Serialize;
use tokio::sync::OwnedMutexGuard;

use crate::infrastructure::ServiceProvider;

pub mod dtos;
pub mod order;
pub mod session;
pub mod utility;

pub const SESSION_HEADER: &str = "x-session-id";
pub const USER_HEADER: &str = "x-user-id";
pub const LANGUAGE_HEADER: &str = "x-language";

/// Envelope of every response body.
#[derive(Debug, Serialize)]
pub struct ResponseBase<T> {
    pub status: i32,
    pub message: String,
    pub content: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn ok(content: T) -> Self {
        Self {
            status: 200,
            message: "ok".to_string(),
            content: Some(content),
        }
    }

    pub fn err(status: i32, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            content: None,
        }
    }
}

/// A successful answer within a session, echoing the session id.
pub struct OrderResponder<T> {
    pub session_id: String,
    pub content: T,
}

impl<T: Serialize> Responder for OrderResponder<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .insert_header((SESSION_HEADER, self.session_id))
            .json(ResponseBase::ok(self.content))
    }
}

pub type OrderResponderResult<T> = Result<OrderResponder<T>, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderException),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Order(e.into())
    }
}

impl ApiError {
    fn displayable_message(&self) -> String {
        match self {
            Self::Order(e) => e.displayable_message(),
            Self::InvalidRequest(_) => self.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Order(OrderException::PermissionDenied { .. }) => StatusCode::FORBIDDEN,
            Self::Order(OrderException::UserNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Order(OrderException::UtilityNotSelected) => StatusCode::BAD_REQUEST,
            Self::Order(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{self:?}");
        } else {
            tracing::info!("{self}");
        }
        HttpResponse::build(status).json(ResponseBase::<()>::err(
            i32::from(status.as_u16()),
            &self.displayable_message(),
        ))
    }
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|el| el.to_str().ok())
        .map(str::trim)
        .filter(|el| !el.is_empty())
}

/// Locks the session of the request and brings its user and language up to date.
pub async fn open_session(
    req: &HttpRequest,
    sp: &ServiceProvider,
    user_repo: &dyn UserRepo,
) -> Result<(String, OwnedMutexGuard<SessionContext>), ApiError> {
    let default_language = *sp.config().application().default_language();
    let language = header(req, LANGUAGE_HEADER).and_then(|el| match el.parse::<Language>() {
        Ok(language) => Some(language),
        Err(e) => {
            tracing::debug!("{e}, falling back to the session language.");
            None
        }
    });
    let (session_id, mut session) = sp
        .session_store()
        .acquire(header(req, SESSION_HEADER), language.unwrap_or(default_language))
        .await;
    if let Some(language) = language {
        session.set_language(language);
    }
    let user = match header(req, USER_HEADER) {
        Some(user_id) => Some(user_repo.get_by_id(user_id).await?.ok_or_else(|| {
            OrderException::UserNotFound {
                user_id: user_id.to_owned(),
            }
        })?),
        None => None,
    };
    session.set_user(user);
    Ok((session_id, session))
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::sync::Arc;

    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::infrastructure::{config::OrderConfig, database::Database, ServiceProvider};

    pub fn service_provider(db: MockDatabase) -> Arc<ServiceProvider> {
        let database = Database::from_connection(db.into_connection());
        Arc::new(ServiceProvider::new(OrderConfig::default(), Arc::new(database)).unwrap())
    }

    pub fn postgres() -> MockDatabase {
        MockDatabase::new(DatabaseBackend::Postgres)
    }
}
