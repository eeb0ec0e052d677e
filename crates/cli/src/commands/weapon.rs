//! Derived statistics of a single weapon.

use anyhow::Result;
use clap::Parser;
use console::style;
use mechlab_core::{RangeSpan, Weapon};
use serde::Serialize;

use super::{emit, find_weapon, print_modifiers};
use crate::config::CliConfig;
use crate::content::Content;

/// Show derived statistics of one weapon
#[derive(Parser)]
pub struct WeaponInfo {
    /// Weapon name (case-insensitive)
    #[arg(value_name = "NAME")]
    name: String,

    /// Range to evaluate damage at
    #[arg(short, long, value_name = "METERS")]
    range: Option<f64>,
}

#[derive(Serialize)]
struct WeaponReport {
    id: u32,
    name: String,
    kind: String,
    range: f64,
    damage_per_shot: f64,
    seconds_per_shot: f64,
    heat: f64,
    dps: f64,
    hps: f64,
    effectiveness: f64,
    optimal_range: RangeSpan,
    effective_range: RangeSpan,
    max_range: f64,
    modifiers: Vec<String>,
}

impl WeaponInfo {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let content = Content::load(config)?;
        let weapon = find_weapon(&content.repository, &self.name)?;
        let range = content.range(config, self.range);

        let report = build_report(weapon, range, &content);
        emit(config.format, &report, |report| {
            print_modifiers(&content.modifiers);
            print_summary(report);
        })
    }
}

fn build_report(weapon: &Weapon, range: f64, content: &Content) -> WeaponReport {
    let mods = content.modifiers.as_slice();
    WeaponReport {
        id: weapon.id().0,
        name: weapon.name().to_string(),
        kind: weapon.kind.to_string(),
        range,
        damage_per_shot: weapon.damage_per_shot(),
        seconds_per_shot: weapon.seconds_per_shot(mods),
        heat: weapon.heat(mods),
        dps: weapon.dps(range, mods),
        hps: weapon.hps(mods),
        effectiveness: weapon.range_effectiveness(range, mods),
        optimal_range: weapon.range_optimal(mods),
        effective_range: weapon.range.percentile_range_with_step(
            content.engine.percentile,
            content.engine.sample_step,
            mods,
        ),
        max_range: weapon.range_max(mods),
        modifiers: content.modifiers.iter().map(ToString::to_string).collect(),
    }
}

fn print_summary(report: &WeaponReport) {
    println!(
        "{} {} {}",
        style(&report.name).bold().green(),
        style(format!("#{}", report.id)).dim(),
        style(&report.kind).cyan()
    );
    println!();
    println!("{}", style("Fire:").bold().yellow());
    println!("  Damage/shot:  {:.2}", report.damage_per_shot);
    println!("  Seconds/shot: {:.3}", report.seconds_per_shot);
    println!("  Heat/shot:    {:.2}", report.heat);
    println!();
    println!("{}", style(format!("At {:.0}m:", report.range)).bold().yellow());
    println!("  Effectiveness: {:.1}%", report.effectiveness * 100.0);
    println!("  DPS:           {:.3}", report.dps);
    println!("  HPS:           {:.3}", report.hps);
    println!();
    println!("{}", style("Range:").bold().yellow());
    println!(
        "  Optimal:   {:.0}m - {:.0}m",
        report.optimal_range.start, report.optimal_range.end
    );
    println!(
        "  Effective: {:.0}m - {:.0}m",
        report.effective_range.start, report.effective_range.end
    );
    println!("  Maximum:   {:.0}m", report.max_range);
}
