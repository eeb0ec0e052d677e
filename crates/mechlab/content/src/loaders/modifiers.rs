//! Active modifier set loader.
//!
//! A modifier file is a RON list of `(key, value)` pairs naming modifier
//! descriptions from the catalog:
//!
//! ```ron
//! [
//!     ("laser_heat", -0.05),
//!     ("cool_run", 0.075),
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use mechlab_core::{Modifier, Repository};

use crate::loaders::{LoadResult, read_file};

/// Loader for modifier sets from RON files.
pub struct ModifierLoader;

impl ModifierLoader {
    /// Load a modifier set, resolving keys against `repository`.
    pub fn load(path: &Path, repository: &Repository) -> LoadResult<Vec<Modifier>> {
        let content = read_file(path)?;
        let modifiers = Self::parse(&content, repository)
            .with_context(|| format!("Failed to load modifiers {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            count = modifiers.len(),
            "loaded modifier set"
        );
        Ok(modifiers)
    }

    /// Parse modifier set RON text.
    pub fn parse(content: &str, repository: &Repository) -> LoadResult<Vec<Modifier>> {
        let entries: Vec<(String, f64)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse modifier RON: {}", e))?;
        let modifiers = repository
            .modifiers(entries.iter().map(|(key, value)| (key.as_str(), *value)))?;
        Ok(modifiers)
    }
}
