use crate::error::{ConfigError, OrderError};
use crate::order::KeyOrder;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Configuration for a single named key order loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    /// Signature code of the order (`bu`, `bd`, `Bu` or `Bd`)
    pub signature: String,
    /// Optional rotation origin, written in the order's alphabet
    #[serde(default)]
    pub origin: Option<String>,
    /// Free-form description shown by `ring-order list`
    #[serde(default)]
    pub description: Option<String>,
}

impl OrderConfig {
    /// Builds the configured order, rotated if an origin is set.
    pub fn build(&self) -> Result<KeyOrder, OrderError> {
        let mut order = KeyOrder::from_signature(&self.signature)?;
        if let Some(origin) = &self.origin {
            order.rotate(origin.as_bytes())?;
        }
        Ok(order)
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Order used when none is named on the command line
    #[serde(default)]
    pub default_order: Option<String>,
}

/// Collection of named key orders loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct OrderRegistry {
    /// Map of order names to their configurations
    #[serde(default)]
    pub orders: HashMap<String, OrderConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl OrderRegistry {
    /// Parses order configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the built-in orders bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../orders.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in orders (from library)
    /// 2. `~/.config/ring-order/orders.toml` (user overrides)
    /// 3. `./orders.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching order names.
    /// Unreadable override files are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("ring-order").join("orders.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(Path::new("orders.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(path = %path.display(), "loaded order overrides");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load order overrides"
                );
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Orders from `other` override orders with the same name in `self`; a default
    /// order set in `other` replaces this one.
    pub fn merge(&mut self, other: OrderRegistry) {
        for (name, order) in other.orders {
            self.orders.insert(name, order);
        }
        if other.settings.default_order.is_some() {
            self.settings.default_order = other.settings.default_order;
        }
    }

    /// Retrieves an order configuration by name.
    pub fn get_order(&self, name: &str) -> Option<&OrderConfig> {
        self.orders.get(name)
    }

    /// Builds the named order.
    pub fn build(&self, name: &str) -> Result<KeyOrder, ConfigError> {
        let config = self
            .get_order(name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;
        config.build().map_err(|source| ConfigError::InvalidOrder {
            name: name.to_string(),
            source,
        })
    }

    /// Builds the order named in `settings.default_order`, or the standard
    /// ascending order if none is configured.
    pub fn build_default(&self) -> Result<KeyOrder, ConfigError> {
        match &self.settings.default_order {
            Some(name) => self.build(name),
            None => Ok(KeyOrder::standard()),
        }
    }

    /// Order names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.orders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
