use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::render::ImportContext;

/// Knobs for a [`crate::Reflector`].
///
/// ```toml
/// skip_bridge_methods = true
/// implicit_imports = ["java.lang.*", "java.util.List"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReflectConfig {
    /// Leave compiler-generated bridge methods out of declared method listings.
    pub skip_bridge_methods: bool,
    /// Canonical class names, or packages in `pkg.*` form, that [`ReflectConfig::import_context`]
    /// treats as imported.
    pub implicit_imports: Vec<String>,
}

impl Default for ReflectConfig {
    fn default() -> Self {
        Self {
            skip_bridge_methods: true,
            implicit_imports: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.message().to_string())
    }
}

impl ReflectConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file from TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: "nova.reflect.config",
            path = %path.display(),
            imports = config.implicit_imports.len(),
            "loaded reflect config"
        );
        Ok(config)
    }

    /// A fresh render context importing everything in `implicit_imports`.
    pub fn import_context(&self) -> ImportContext {
        let mut ctx = ImportContext::new();
        for import in &self.implicit_imports {
            ctx.import(import);
        }
        ctx
    }
}
