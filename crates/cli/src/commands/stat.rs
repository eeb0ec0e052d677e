//! Ranking weapons by a stat expression.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use mechlab_core::StatExpr;
use serde::Serialize;

use super::{emit, find_weapon};
use crate::config::CliConfig;
use crate::content::Content;

/// Rank weapons by a stat expression such as "d/h"
///
/// Letters: d = damage/shot, s = seconds/shot, t = tons, h = heat, c = slots.
#[derive(Parser)]
pub struct Stat {
    /// Expression over d, s, t, h, c with at most one '/'
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Restrict to these weapons (defaults to every weapon)
    #[arg(short, long = "weapon", value_name = "NAME")]
    weapons: Vec<String>,

    /// Show only the top N weapons
    #[arg(short, long, value_name = "N")]
    top: Option<usize>,
}

#[derive(Serialize)]
struct StatRow {
    name: String,
    value: f64,
}

#[derive(Serialize)]
struct StatReport {
    expression: String,
    rows: Vec<StatRow>,
}

impl Stat {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let expr: StatExpr = self
            .expression
            .parse()
            .with_context(|| format!("Invalid stat expression '{}'", self.expression))?;

        let content = Content::load(config)?;
        let weapons = if self.weapons.is_empty() {
            content.repository.weapons().collect::<Vec<_>>()
        } else {
            self.weapons
                .iter()
                .map(|name| find_weapon(&content.repository, name))
                .collect::<Result<Vec<_>>>()?
        };

        let mut rows: Vec<StatRow> = weapons
            .into_iter()
            .map(|weapon| StatRow {
                name: weapon.name().to_string(),
                value: expr.evaluate(&**weapon, &content.modifiers),
            })
            .collect();
        rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        if let Some(top) = self.top {
            rows.truncate(top);
        }

        let report = StatReport {
            expression: self.expression,
            rows,
        };
        emit(config.format, &report, print_summary)
    }
}

fn print_summary(report: &StatReport) {
    println!("{} {}", style("Stat:").bold().cyan(), report.expression);
    println!();
    for (rank, row) in report.rows.iter().enumerate() {
        println!("  {:>2}. {:<20} {:>10.4}", rank + 1, row.name, row.value);
    }
}
