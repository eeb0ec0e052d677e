//! Default content compiled into the crate.
//!
//! Useful for tools and tests that should work without a data directory.

use mechlab_core::{EngineConfig, Modifier, Repository};

use crate::data;
use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, ModifierLoader};

/// Repository built from the embedded `items.ron`.
pub fn repository() -> LoadResult<Repository> {
    CatalogLoader::parse(data::ITEMS_RON)
}

/// Default modifier set from the embedded `modifiers.ron`.
pub fn modifiers(repository: &Repository) -> LoadResult<Vec<Modifier>> {
    ModifierLoader::parse(data::MODIFIERS_RON, repository)
}

/// Engine configuration from the embedded `config.toml`.
pub fn config() -> LoadResult<EngineConfig> {
    ConfigLoader::parse(data::CONFIG_TOML)
}
