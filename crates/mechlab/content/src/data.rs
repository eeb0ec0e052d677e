//! Default data files compiled into the crate.
//!
//! These mirror the files under `data/` and are what
//! [`crate::loaders::embedded`] parses when no data directory is given.

/// Equipment catalog (`items.ron`).
pub const ITEMS_RON: &str = include_str!("../data/items.ron");

/// Default active modifiers (`modifiers.ron`).
pub const MODIFIERS_RON: &str = include_str!("../data/modifiers.ron");

/// Engine configuration (`config.toml`).
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");
