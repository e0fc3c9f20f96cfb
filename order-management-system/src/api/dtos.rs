use domain_order::model::vo::UtilityScope;
use serde::Deserialize;

use super::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderFormQuery {
    pub utility_id: Option<i32>,
}

/// `utilityIds=1,2`; absent or empty means the global scope.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityIdsQuery {
    pub utility_ids: Option<String>,
}

impl UtilityIdsQuery {
    pub fn scope(&self) -> Result<UtilityScope, ApiError> {
        let Some(ids) = self.utility_ids.as_deref() else {
            return Ok(UtilityScope::Global);
        };
        let ids = ids
            .split(',')
            .map(str::trim)
            .filter(|el| !el.is_empty())
            .map(|el| {
                el.parse::<i32>().map_err(|e| {
                    let reason = format!(r#"error when parse utility id from "{el}": {e}"#);
                    ApiError::InvalidRequest(reason)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(UtilityScope::new(ids))
    }
}
