//! Build recipe and installed-software manifest loading.
//!
//! Recipes declare dependencies as a name plus a version-constraint
//! expression; the manifest records which version of each piece of software
//! is actually installed. Both are plain YAML files consumed by the CLI
//! layer before the gate in [`crate::check`] runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::check::VersionLookup;

/// A dependency declaration from a build recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    /// Version-constraint expression, e.g. `>=2016a,<=2019b`.
    pub version: String,
}

/// A build recipe, reduced to the fields the dependency gate consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse recipe {}", path.display()))
    }
}

/// Installed-software inventory mapping dependency name to installed
/// version string.
///
/// The YAML shape is a flat mapping:
///
/// ```yaml
/// tzdata: 2016b
/// gcc: 9c
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub installed: HashMap<String, String>,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    /// Build a manifest from (name, version) pairs.
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        Manifest {
            installed: entries
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
        }
    }
}

impl VersionLookup for Manifest {
    fn installed_version(&self, name: &str) -> Option<String> {
        self.installed.get(name).cloned()
    }
}
