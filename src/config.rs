//! Classifier configuration
//!
//! Selects which math domain kinds the classifier recognizes and the order
//! their membership tests run in. TOML-backed, with environment overrides:
//!
//! ```toml
//! [domain]
//! order = ["Complex", "Matrix", "Node"]
//! ```

use std::env;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::RegistryError;
use crate::math::{self, DomainKind};

pub const ENV_DOMAIN_ORDER: &str = "LYRA_TYPEOF_DOMAIN_ORDER";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Kinds to register, most specific first
    pub order: Vec<DomainKind>,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self { order: math::default_order() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub domain: DomainConfig,
}

impl ClassifierConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        debug!(
            "loaded classifier config from {}: {} domain kinds",
            path.as_ref().display(),
            config.domain.order.len()
        );
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let toml_content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), toml_content)?;
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var(ENV_DOMAIN_ORDER) {
            self.apply_order_override(&val);
        }
    }

    /// Replace the domain order with a comma-separated list of kind names.
    /// Unknown names are skipped; if none parse the current order is kept.
    pub fn apply_order_override(&mut self, list: &str) {
        let mut order = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.parse::<DomainKind>() {
                Ok(kind) => order.push(kind),
                Err(e) => warn!("{}: ignoring entry: {}", ENV_DOMAIN_ORDER, e),
            }
        }
        if order.is_empty() {
            warn!(
                "{}: no usable entries in '{}', keeping configured order",
                ENV_DOMAIN_ORDER, list
            );
            return;
        }
        self.domain.order = order;
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = Vec::with_capacity(self.domain.order.len());
        for kind in &self.domain.order {
            if seen.contains(kind) {
                return Err(ConfigError::Validation(format!(
                    "domain kind '{}' listed more than once",
                    kind
                )));
            }
            seen.push(*kind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_uses_defaults() {
        let config = ClassifierConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClassifierConfig::default());
        assert_eq!(config.domain.order, math::default_order());
    }

    #[test]
    fn test_order_override_skips_unknown_names() {
        let mut config = ClassifierConfig::default();
        config.apply_order_override("Matrix, Quaternion ,Complex,");
        assert_eq!(config.domain.order, vec![DomainKind::Matrix, DomainKind::Complex]);
    }

    #[test]
    fn test_unusable_override_keeps_order() {
        let mut config = ClassifierConfig::default();
        config.apply_order_override("Quaternion");
        assert_eq!(config.domain.order, math::default_order());
        config.apply_order_override(" , ");
        assert_eq!(config.domain.order, math::default_order());
    }

    #[test]
    fn test_env_override_applied_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typeof.toml");
        ClassifierConfig::default().save_to_file(&path).unwrap();

        env::set_var(ENV_DOMAIN_ORDER, "Node,Complex");
        let loaded = ClassifierConfig::load_from_file(&path);
        env::set_var(ENV_DOMAIN_ORDER, "Tensor");
        let kept = ClassifierConfig::load_from_file(&path);
        env::remove_var(ENV_DOMAIN_ORDER);

        assert_eq!(loaded.unwrap().domain.order, vec![DomainKind::Node, DomainKind::Complex]);
        assert_eq!(kept.unwrap().domain.order, math::default_order());
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = ClassifierConfig::from_toml_str("[domain]\norder = [\"Unit\", \"Unit\"]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = ClassifierConfig::from_toml_str("[domain]\norder = [\"Tensor\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
