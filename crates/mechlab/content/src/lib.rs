//! Data-driven equipment content and loaders.
//!
//! This crate houses the default equipment data and provides loaders for
//! RON/TOML data files:
//! - Equipment catalog: weapons, heat sinks, engines and modifier descriptions (RON)
//! - Active modifier sets as `(key, value)` pairs (RON)
//! - Engine configuration (TOML)
//!
//! Loaders turn data formats into validated `mechlab-core` types; the core
//! itself never touches the filesystem.

pub mod data;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, LoadResult, ModifierLoader, embedded,
};
