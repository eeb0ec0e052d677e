//! Loadout metrics for a set of weapons on one chassis.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use mechlab_core::{HeatSink, Loadout, LoadoutMetrics, Repository};
use serde::Serialize;

use super::{emit, find_weapon, print_modifiers};
use crate::config::CliConfig;
use crate::content::Content;

/// Evaluate alpha strike, DPS and heat of a loadout
#[derive(Parser)]
pub struct Alpha {
    /// Weapons to fit; repeat a name to fit several copies
    #[arg(value_name = "WEAPON", required = true)]
    weapons: Vec<String>,

    /// Chassis mass in tons
    #[arg(long, value_name = "TONS", default_value_t = 50.0)]
    tonnage: f64,

    /// Engine name
    #[arg(short, long, value_name = "ENGINE")]
    engine: Option<String>,

    /// Heat sink type, also used for the engine's internal sinks
    #[arg(long, value_name = "NAME", default_value = "Heat Sink")]
    heat_sink: String,

    /// Number of heat sinks fitted outside the engine
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 0)]
    external_sinks: u32,

    /// Range to evaluate damage at
    #[arg(short, long, value_name = "METERS")]
    range: Option<f64>,
}

#[derive(Serialize)]
struct AlphaReport {
    tonnage: f64,
    engine: Option<String>,
    weapons: Vec<String>,
    heat_sinks: u32,
    metrics: LoadoutMetrics,
}

impl Alpha {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        if !(self.tonnage.is_finite() && self.tonnage > 0.0) {
            anyhow::bail!("Chassis mass must be positive, got {}", self.tonnage);
        }

        let content = Content::load(config)?;
        let loadout = self.build_loadout(&content.repository)?;
        let range = content.range(config, self.range);

        let report = AlphaReport {
            tonnage: self.tonnage,
            engine: loadout.engine().map(|e| e.name().to_string()),
            weapons: loadout.weapons().iter().map(|w| w.name().to_string()).collect(),
            heat_sinks: self.external_sinks,
            metrics: loadout.metrics(range, &content.modifiers),
        };

        emit(config.format, &report, |report| {
            print_modifiers(&content.modifiers);
            print_summary(report);
        })
    }

    fn build_loadout(&self, repository: &Repository) -> Result<Loadout> {
        let sink: Arc<HeatSink> = repository
            .heat_sink_by_name(&self.heat_sink)
            .cloned()
            .with_context(|| format!("Unknown heat sink '{}'", self.heat_sink))?;

        let mut loadout = Loadout::new(self.tonnage);
        if let Some(name) = &self.engine {
            let engine = repository
                .engine_by_name(name)
                .cloned()
                .with_context(|| format!("Unknown engine '{}'", name))?;
            loadout = loadout.with_engine(engine, Arc::clone(&sink));
        }
        for _ in 0..self.external_sinks {
            loadout = loadout.with_heat_sink(Arc::clone(&sink));
        }
        for name in &self.weapons {
            loadout = loadout.with_weapon(Arc::clone(find_weapon(repository, name)?));
        }

        Ok(loadout)
    }
}

fn print_summary(report: &AlphaReport) {
    let m = &report.metrics;

    println!("{}", style("=== Loadout ===").bold().green());
    println!("  Chassis:    {:.0}t", report.tonnage);
    println!(
        "  Engine:     {}",
        report.engine.as_deref().unwrap_or("none")
    );
    println!("  Heat sinks: {} external", report.heat_sinks);
    println!("  Weapons:    {}", report.weapons.join(", "));
    println!();

    println!("{}", style(format!("Damage at {:.0}m:", m.range)).bold().yellow());
    println!("  Alpha strike: {:.2}", m.alpha_strike);
    println!("  Max DPS:      {:.3}", m.max_dps);
    println!();

    println!("{}", style("Heat:").bold().yellow());
    println!("  Alpha heat:   {:.2} ({:.2} ghost)", m.alpha_heat, m.ghost_heat);
    println!("  Generation:   {:.3}/s", m.heat_generation);
    println!("  Dissipation:  {:.3}/s", m.heat_dissipation);
    println!("  Capacity:     {:.2}", m.heat_capacity);
    match m.time_to_overheat {
        Some(seconds) => println!("  Overheat in:  {:.1}s", seconds),
        None => println!("  Overheat in:  {}", style("never").green()),
    }
    println!();

    println!("{}", style("Mobility:").bold().yellow());
    println!("  Top speed:    {:.1} km/h", m.top_speed);
}
