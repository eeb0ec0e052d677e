//! Damage effectiveness of a weapon over range.

use anyhow::Result;
use clap::Parser;
use console::style;
use mechlab_core::{InterpolationType, Weapon};
use serde::Serialize;

use super::{emit, find_weapon};
use crate::config::CliConfig;
use crate::content::Content;

/// Tabulate damage effectiveness over range
#[derive(Parser)]
pub struct Profile {
    /// Weapon name (case-insensitive)
    #[arg(value_name = "NAME")]
    name: String,

    /// Distance between rows
    #[arg(short, long, value_name = "METERS", default_value_t = 50.0)]
    step: f64,

    /// Last range to tabulate (defaults to the weapon's maximum range)
    #[arg(long, value_name = "METERS")]
    until: Option<f64>,
}

#[derive(Serialize)]
struct Breakpoint {
    range: f64,
    interpolation: InterpolationType,
    damage_multiplier: f64,
}

#[derive(Serialize)]
struct Sample {
    range: f64,
    effectiveness: f64,
    dps: f64,
}

#[derive(Serialize)]
struct ProfileReport {
    name: String,
    breakpoints: Vec<Breakpoint>,
    samples: Vec<Sample>,
}

impl Profile {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            anyhow::bail!("Step must be positive, got {}", self.step);
        }

        let content = Content::load(config)?;
        let weapon = find_weapon(&content.repository, &self.name)?;
        let until = self
            .until
            .unwrap_or_else(|| weapon.range_max(&content.modifiers));

        let report = ProfileReport {
            name: weapon.name().to_string(),
            breakpoints: breakpoints(weapon, &content),
            samples: sample_ranges(until, self.step)
                .map(|range| Sample {
                    range,
                    effectiveness: weapon.range_effectiveness(range, &content.modifiers),
                    dps: weapon.dps(range, &content.modifiers),
                })
                .collect(),
        };

        emit(config.format, &report, print_summary)
    }
}

fn breakpoints(weapon: &Weapon, content: &Content) -> Vec<Breakpoint> {
    let starts = weapon.range.breakpoints(&content.modifiers);
    weapon
        .range
        .nodes()
        .iter()
        .zip(starts)
        .map(|(node, range)| Breakpoint {
            range,
            interpolation: node.interpolation().kind(),
            damage_multiplier: node.damage_multiplier(),
        })
        .collect()
}

/// `0, step, 2·step, ...` up to and including `until`.
fn sample_ranges(until: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |index| f64::from(index) * step)
        .take_while(move |&range| range <= until)
}

fn print_summary(report: &ProfileReport) {
    println!("{}", style(&report.name).bold().green());
    println!();

    println!("{}", style("Breakpoints:").bold().yellow());
    for bp in &report.breakpoints {
        println!(
            "  {:>7.1}m  {:>5.1}%  {}",
            bp.range,
            bp.damage_multiplier * 100.0,
            bp.interpolation
        );
    }
    println!();

    println!("{}", style("   Range   Effect      DPS").bold().yellow());
    for sample in &report.samples {
        let bar = "#".repeat((sample.effectiveness * 20.0).round() as usize);
        println!(
            "  {:>6.0}m  {:>6.1}%  {:>7.3}  {}",
            sample.range,
            sample.effectiveness * 100.0,
            sample.dps,
            style(bar).cyan()
        );
    }
}
