//! Configuration for a reconciliation session.
//!
//! `ReconConfig` centralizes the behavioral knobs of the engine so they are
//! validated once, at session construction, instead of scattered through
//! call sites.

use icu_locid::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconConfig {
    /// BCP-47 language tag whose collation rules order string cells.
    pub locale: String,
    /// When set, a cell diff is also significant if the two values classify
    /// to different cell types. This is an additional trigger on top of the
    /// value comparison, never a replacement for it.
    pub type_check_enabled: bool,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            type_check_enabled: false,
        }
    }
}

impl ReconConfig {
    pub fn builder() -> ReconConfigBuilder {
        ReconConfigBuilder {
            inner: ReconConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.parse::<Locale>().is_err() {
            return Err(ConfigError::InvalidLocale {
                locale: self.locale.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("locale '{locale}' is not a valid BCP-47 language tag")]
    InvalidLocale { locale: String },
}

#[derive(Debug, Clone, Default)]
pub struct ReconConfigBuilder {
    inner: ReconConfig,
}

impl ReconConfigBuilder {
    pub fn new() -> Self {
        ReconConfig::builder()
    }

    pub fn locale(mut self, value: impl Into<String>) -> Self {
        self.inner.locale = value.into();
        self
    }

    pub fn type_check_enabled(mut self, value: bool) -> Self {
        self.inner.type_check_enabled = value;
        self
    }

    pub fn build(self) -> Result<ReconConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
