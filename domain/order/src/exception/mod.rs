use crate::model::vo::{Language, Permission};

pub type OrderResult<T> = Result<T, OrderException>;

/// Errors that abort the current request.
///
/// Field validation problems and persistence failures are not represented here,
/// they are returned as values ([`ValidationErrors`] and [`OperationResult`]).
///
/// [`ValidationErrors`]: crate::model::vo::ValidationErrors
/// [`OperationResult`]: crate::model::vo::OperationResult
#[derive(Debug, thiserror::Error)]
pub enum OrderException {
    #[error("No translation resource found for language: {language} at {location}.")]
    TranslationNotFound { language: Language, location: String },

    #[error("The translation resource for language: {language} could not be parsed: {source}")]
    TranslationParse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("The user is not granted the permission: {permission:?}.")]
    PermissionDenied { permission: Permission },

    #[error("An order can only be created for a selected utility.")]
    UtilityNotSelected,

    #[error("There is no user with id: {user_id}.")]
    UserNotFound { user_id: String },

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Order internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for OrderException {
    fn from(e: anyhow::Error) -> Self {
        OrderException::InternalError { source: e }
    }
}

impl OrderException {
    /// A message that can be shown to the end user without leaking internal details.
    pub fn displayable_message(&self) -> String {
        match self {
            OrderException::PermissionDenied { .. }
            | OrderException::UtilityNotSelected
            | OrderException::UserNotFound { .. } => self.to_string(),
            _ => "Internal error".to_string(),
        }
    }
}
