//! Command implementations for the mechlab CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod alpha;
mod profile;
mod stat;
mod weapon;

pub use alpha::Alpha;
pub use profile::Profile;
pub use stat::Stat;
pub use weapon::WeaponInfo;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use mechlab_core::{Modifier, Repository, Weapon};
use serde::Serialize;

use crate::config::OutputFormat;

/// Flags shared by every command.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Data directory with items.ron (defaults to the embedded catalog)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Modifier set: "default", "none" or a name under modifiers/
    #[arg(short, long, value_name = "SET", global = true)]
    pub modifiers: Option<String>,

    /// Evaluate base values without any modifiers
    #[arg(long, global = true)]
    pub no_modifiers: bool,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

/// Finds a weapon by name, listing the known names on failure.
fn find_weapon<'a>(repository: &'a Repository, name: &str) -> Result<&'a Arc<Weapon>> {
    repository.weapon_by_name(name).with_context(|| {
        let known: Vec<&str> = repository.weapons().map(|w| w.name()).collect();
        format!("Unknown weapon '{}'. Known weapons: {}", name, known.join(", "))
    })
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_modifiers(modifiers: &[Modifier]) {
    if modifiers.is_empty() {
        println!("{}", style("Modifiers: none").dim());
        return;
    }
    println!("{}", style("Modifiers:").bold().yellow());
    for modifier in modifiers {
        let line = match modifier.is_beneficial() {
            Some(true) => style(modifier.to_string()).green(),
            Some(false) => style(modifier.to_string()).red(),
            None => style(modifier.to_string()),
        };
        println!("  {}", line);
    }
    println!();
}

fn emit<T: Serialize>(format: OutputFormat, report: &T, summary: impl FnOnce(&T)) -> Result<()> {
    match format {
        OutputFormat::Summary => {
            summary(report);
            Ok(())
        }
        OutputFormat::Json => print_json(report),
    }
}
