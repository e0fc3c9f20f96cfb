use serde::{Deserialize, Serialize};

/// The outcome of a persistence attempt.
///
/// `short_msg` is safe to show to the user, `long_msg` carries the details for the logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub ok: bool,
    pub short_msg: Option<String>,
    pub long_msg: Option<String>,
}

impl Default for OperationResult {
    fn default() -> Self {
        Self::success()
    }
}

impl OperationResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            short_msg: None,
            long_msg: None,
        }
    }

    pub fn failure(short_msg: impl Into<String>, long_msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            short_msg: Some(short_msg.into()),
            long_msg: Some(long_msg.into()),
        }
    }
}
