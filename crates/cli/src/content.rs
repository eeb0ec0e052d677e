//! Loads repository, modifiers and engine configuration for a command.

use anyhow::{Context, Result};
use mechlab_content::{ContentFactory, embedded};
use mechlab_core::{EngineConfig, Modifier, Repository};

use crate::config::{CliConfig, ModifierSelection};

/// Everything a command evaluates against.
pub struct Content {
    pub repository: Repository,
    pub modifiers: Vec<Modifier>,
    pub engine: EngineConfig,
}

impl Content {
    pub fn load(config: &CliConfig) -> Result<Self> {
        let content = match &config.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let repository = factory.load_repository()?;
                let modifiers = match &config.modifiers {
                    ModifierSelection::Default => factory.load_modifiers(&repository)?,
                    ModifierSelection::None => Vec::new(),
                    ModifierSelection::Named(name) => {
                        factory.load_modifier_set(name, &repository)?
                    }
                };
                let engine = factory.load_config()?;
                Self {
                    repository,
                    modifiers,
                    engine,
                }
            }
            None => {
                let repository = embedded::repository().context("Embedded catalog is invalid")?;
                let modifiers = match &config.modifiers {
                    ModifierSelection::Default => embedded::modifiers(&repository)?,
                    ModifierSelection::None => Vec::new(),
                    ModifierSelection::Named(name) => anyhow::bail!(
                        "Modifier set '{}' requires a data directory (--data-dir or MECHLAB_DATA_DIR)",
                        name
                    ),
                };
                let engine = embedded::config()?;
                Self {
                    repository,
                    modifiers,
                    engine,
                }
            }
        };

        tracing::debug!(
            items = content.repository.len(),
            modifiers = content.modifiers.len(),
            "content ready"
        );
        Ok(content)
    }

    /// Range to evaluate at: explicit argument, then configuration.
    pub fn range(&self, config: &CliConfig, explicit: Option<f64>) -> f64 {
        explicit
            .or(config.range)
            .unwrap_or(self.engine.default_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_by_default() {
        let content = Content::load(&CliConfig::default()).unwrap();
        assert!(!content.repository.is_empty());
        assert!(!content.modifiers.is_empty());
    }

    #[test]
    fn none_selection_drops_modifiers() {
        let config = CliConfig {
            modifiers: ModifierSelection::None,
            ..CliConfig::default()
        };
        assert!(Content::load(&config).unwrap().modifiers.is_empty());
    }

    #[test]
    fn named_set_needs_data_dir() {
        let config = CliConfig {
            modifiers: ModifierSelection::Named("elite".into()),
            ..CliConfig::default()
        };
        assert!(Content::load(&config).is_err());
    }

    #[test]
    fn explicit_range_wins() {
        let content = Content::load(&CliConfig::default()).unwrap();
        let config = CliConfig {
            range: Some(300.0),
            ..CliConfig::default()
        };
        assert_eq!(content.range(&config, Some(100.0)), 100.0);
        assert_eq!(content.range(&config, None), 300.0);
        assert_eq!(content.range(&CliConfig::default(), None), 0.0);
    }
}
