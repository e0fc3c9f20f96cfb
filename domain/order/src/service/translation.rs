use std::sync::Arc;

use crate::{
    exception::OrderResult,
    model::vo::{Language, TranslationBundle},
};

pub trait TranslationService: Send + Sync {
    /// The bundle of `language`. A missing or malformed resource is an error.
    fn load(&self, language: Language) -> OrderResult<Arc<TranslationBundle>>;
}
