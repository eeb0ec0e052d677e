//! Content loaders for reading equipment data from files.
//!
//! Every loader exposes `load(path)` for files on disk and `parse(text)` for
//! data already in memory; file loads attach the path to any error.

pub mod catalog;
pub mod config;
pub mod embedded;
pub mod factory;
pub mod modifiers;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use modifiers::ModifierLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read data file");
    Ok(content)
}
