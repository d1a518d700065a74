// Engine settings, loaded from a JSON file or taken from defaults
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use shared::models::{CurrencyVocabulary, Gender};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub currency: CurrencyVocabulary,
    pub feminine_ordinals: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            currency: CurrencyVocabulary::brl(),
            feminine_ordinals: false,
        }
    }
}

impl EngineSettings {
    pub fn load_from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        tracing::info!(path = %path.display(), symbol = %settings.currency.symbol, "loaded engine settings");
        Ok(settings)
    }

    /// Rejects vocabularies with blank words, which would print dangling spaces.
    pub fn validate(&self) -> EngineResult<()> {
        let c = &self.currency;
        let words = [
            ("unit_singular", &c.unit_singular),
            ("unit_plural", &c.unit_plural),
            ("subunit_singular", &c.subunit_singular),
            ("subunit_plural", &c.subunit_plural),
        ];
        for (field, word) in words {
            if word.trim().is_empty() {
                return Err(EngineError::ConfigError(format!("'currency.{}' está vazio", field)));
            }
        }
        Ok(())
    }

    pub fn ordinal_gender(&self) -> Gender {
        Gender::from_feminine(self.feminine_ordinals)
    }
}
