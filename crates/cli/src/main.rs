//! Command-line front end for the mechlab engine.
//!
//! Evaluates weapons and loadouts from the embedded catalog or a data
//! directory. Run with: `mechlab <command>`

mod commands;
mod config;
mod content;

use anyhow::Result;
use clap::Parser;
use commands::{Alpha, GlobalArgs, Profile, Stat, WeaponInfo};
use config::CliConfig;

/// Mech loadout calculator
#[derive(Parser)]
#[command(name = "mechlab")]
#[command(about = "Evaluate mech weapons and loadouts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show derived statistics of one weapon
    Weapon(WeaponInfo),

    /// Evaluate alpha strike, DPS and heat of a loadout
    Alpha(Alpha),

    /// Tabulate damage effectiveness over range
    Profile(Profile),

    /// Rank weapons by a stat expression such as "d/h"
    Stat(Stat),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MECHLAB_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().merge_args(&cli.global);

    match cli.command {
        Command::Weapon(cmd) => cmd.execute(&config),
        Command::Alpha(cmd) => cmd.execute(&config),
        Command::Profile(cmd) => cmd.execute(&config),
        Command::Stat(cmd) => cmd.execute(&config),
    }
}
