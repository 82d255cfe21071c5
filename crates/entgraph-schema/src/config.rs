use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read schema config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// SchemaOptions
/// Toggles handed through to the registration primitive.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaOptions {
    /// Whether stored documents are checked against the declared shapes.
    pub schema_validation: bool,

    /// Whether table names are typed strictly by downstream consumers.
    pub strict_table_name_types: bool,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            schema_validation: true,
            strict_table_name_types: true,
        }
    }
}

impl SchemaOptions {
    /// Parse options from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load options from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    #[must_use]
    pub const fn with_schema_validation(mut self, enabled: bool) -> Self {
        self.schema_validation = enabled;
        self
    }
}
