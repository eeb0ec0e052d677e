//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use mechlab_core::{EngineConfig, Modifier, Repository};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, ModifierLoader};

/// Content factory that loads all equipment content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── modifiers.ron
/// └── modifiers/
///     └── {name}.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the equipment catalog from `items.ron`.
    pub fn load_repository(&self) -> LoadResult<Repository> {
        let path = self.data_dir.join("items.ron");
        CatalogLoader::load(&path)
    }

    /// Load the default modifier set from `modifiers.ron`.
    pub fn load_modifiers(&self, repository: &Repository) -> LoadResult<Vec<Modifier>> {
        let path = self.data_dir.join("modifiers.ron");
        ModifierLoader::load(&path, repository)
    }

    /// Load a named modifier set from `modifiers/{name}.ron`.
    pub fn load_modifier_set(
        &self,
        name: &str,
        repository: &Repository,
    ) -> LoadResult<Vec<Modifier>> {
        let path = self.data_dir.join("modifiers").join(format!("{}.ron", name));
        ModifierLoader::load(&path, repository)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
