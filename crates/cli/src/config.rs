//! CLI configuration from environment variables and global flags.
use std::env;
use std::path::PathBuf;

use crate::commands::GlobalArgs;

/// Which active modifiers commands evaluate under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModifierSelection {
    /// `modifiers.ron` of the data source.
    #[default]
    Default,
    /// No modifiers; base values only.
    None,
    /// `modifiers/{name}.ron` of the data directory.
    Named(String),
}

impl ModifierSelection {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "default" => Self::Default,
            "none" => Self::None,
            name => Self::Named(name.to_string()),
        }
    }
}

/// Resolved CLI configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Data directory; the embedded catalog is used when absent.
    pub data_dir: Option<PathBuf>,
    pub modifiers: ModifierSelection,
    /// Range for damage figures when a command is not given one.
    pub range: Option<f64>,
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// JSON output
    Json,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MECHLAB_DATA_DIR` - Data directory with `items.ron` (default: embedded catalog)
    /// - `MECHLAB_MODIFIERS` - `default`, `none` or a modifier set name (default: `default`)
    /// - `MECHLAB_RANGE` - Evaluation range (default: engine configuration)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("MECHLAB_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(selection) = lookup("MECHLAB_MODIFIERS") {
            config.modifiers = ModifierSelection::parse(&selection);
        }
        if let Some(range) = read_var::<f64, _>(&lookup, "MECHLAB_RANGE") {
            config.range = Some(range.max(0.0));
        }

        config
    }

    /// Applies command-line flags, which take precedence over the environment.
    pub fn merge_args(mut self, args: &GlobalArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if args.no_modifiers {
            self.modifiers = ModifierSelection::None;
        } else if let Some(name) = &args.modifiers {
            self.modifiers = ModifierSelection::parse(name);
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        self
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
