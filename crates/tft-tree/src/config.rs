use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

/// File names that are never turned into nodes (OS artifacts).
pub const DEFAULT_RESERVED_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Configuration for the tree engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// File names silently rejected at file construction.
    pub reserved_names: BTreeSet<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            reserved_names: DEFAULT_RESERVED_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl TreeConfig {
    /// A configuration with the given reserved names instead of the defaults.
    pub fn with_reserved_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved_names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// ```toml
    /// reserved_names = [".DS_Store", "Thumbs.db"]
    /// ```
    pub fn from_toml_str(s: &str) -> TreeResult<Self> {
        toml::from_str(s).map_err(|e| TreeError::Config(e.to_string()))
    }

    /// Returns `true` if files with this exact name must not be created.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.contains(name)
    }
}
