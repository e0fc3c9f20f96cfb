//! Translation bundles of the order management system.
//!
//! Every supported language ships embedded in the binary. A directory can be
//! given to replace them with `{directory}/{code}.json` files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use domain_order::{
    exception::{OrderException, OrderResult},
    model::vo::{Language, TranslationBundle},
    service::TranslationService,
};

fn embedded_resource(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../resources/en.json"),
        Language::Sv => include_str!("../resources/sv.json"),
    }
}

enum Source {
    Embedded,
    Directory(PathBuf),
}

/// Loads and caches the bundle of each language on first use.
pub struct TranslationLoader {
    source: Source,
    cache: DashMap<Language, Arc<TranslationBundle>>,
}

impl Default for TranslationLoader {
    fn default() -> Self {
        Self::embedded()
    }
}

impl TranslationLoader {
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
            cache: DashMap::new(),
        }
    }

    pub fn from_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(directory.into()),
            cache: DashMap::new(),
        }
    }

    /// Embedded bundles unless `directory` is given.
    pub fn new(directory: Option<&Path>) -> Self {
        match directory {
            Some(directory) => Self::from_directory(directory),
            None => Self::embedded(),
        }
    }

    /// Loads every language up front, so a broken resource is found at startup.
    pub fn preload(&self) -> OrderResult<()> {
        for language in Language::ALL {
            self.load(language)?;
        }
        Ok(())
    }

    fn read(&self, language: Language) -> OrderResult<TranslationBundle> {
        let content = match &self.source {
            Source::Embedded => embedded_resource(language).to_owned(),
            Source::Directory(directory) => {
                let path = directory.join(format!("{}.json", language.code()));
                std::fs::read_to_string(&path).map_err(|e| {
                    tracing::error!("Cannot read translation {}: {e}", path.display());
                    OrderException::TranslationNotFound {
                        language,
                        location: path.display().to_string(),
                    }
                })?
            }
        };
        serde_json::from_str(&content)
            .map_err(|source| OrderException::TranslationParse { language, source })
    }
}

impl TranslationService for TranslationLoader {
    fn load(&self, language: Language) -> OrderResult<Arc<TranslationBundle>> {
        if let Some(bundle) = self.cache.get(&language) {
            return Ok(bundle.clone());
        }
        let bundle = Arc::new(self.read(language)?);
        tracing::debug!("Loaded translation: {language}.");
        Ok(self.cache.entry(language).or_insert(bundle).clone())
    }
}
