//! Weapon range profiles.
//!
//! A profile is a piecewise function from range to damage multiplier. Its
//! breakpoints are [`Attribute`]s, so range modifiers move them, and an
//! optional spread attribute scales the result by expected accuracy.
//!
//! ```text
//!  1.0 ┤────────╮
//!      │         ╲            LINEAR between breakpoints
//!  0.5 ┤          ╲
//!      │           ╲
//!  0.0 ┼────────────╰────────
//!      0        270    540   range
//! ```

mod node;
pub mod spread;

pub use node::{Interpolation, InterpolationType, RangeNode};

use crate::attribute::Attribute;
use crate::config::EngineConfig;
use crate::error::{EngineError, ErrorSeverity};
use crate::modifier::Modifier;

/// Construction-time validation failures of range data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RangeProfileError {
    #[error("exponential range node at {at} has no exponent")]
    MissingExponent { at: f64 },

    #[error("{kind} range node at {at} specifies exponent {exponent}")]
    UnexpectedExponent {
        at: f64,
        kind: InterpolationType,
        exponent: f64,
    },

    #[error("range node at {at} has non-finite exponent {exponent}")]
    InvalidExponent { at: f64, exponent: f64 },

    #[error("range nodes out of order: {next} follows {previous}")]
    Unsorted { previous: f64, next: f64 },
}

impl EngineError for RangeProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingExponent { .. } => "RANGE_MISSING_EXPONENT",
            Self::UnexpectedExponent { .. } => "RANGE_UNEXPECTED_EXPONENT",
            Self::InvalidExponent { .. } => "RANGE_INVALID_EXPONENT",
            Self::Unsorted { .. } => "RANGE_UNSORTED",
        }
    }
}

/// Closed interval of ranges `[start, end]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSpan {
    pub start: f64,
    pub end: f64,
}

impl RangeSpan {
    /// Zero-length span returned when a query has no answer.
    pub const EMPTY: Self = Self {
        start: 0.0,
        end: 0.0,
    };

    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.length() <= 0.0
    }

    pub fn contains(&self, range: f64) -> bool {
        self.start <= range && range <= self.end
    }
}

/// Piecewise damage-over-range function of a weapon.
///
/// # Invariants
/// - nodes are sorted ascending by base start range
/// - a trailing run of zero-damage nodes is collapsed to a single node
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRangeProfile {
    nodes: Vec<RangeNode>,
    spread: Option<Attribute>,
}

impl WeaponRangeProfile {
    pub fn new(
        mut nodes: Vec<RangeNode>,
        spread: Option<Attribute>,
    ) -> Result<Self, RangeProfileError> {
        for pair in nodes.windows(2) {
            let previous = pair[0].start().base_value();
            let next = pair[1].start().base_value();
            if next < previous {
                return Err(RangeProfileError::Unsorted { previous, next });
            }
        }

        let before = nodes.len();
        while nodes.len() >= 2
            && nodes[nodes.len() - 1].damage_multiplier() == 0.0
            && nodes[nodes.len() - 2].damage_multiplier() == 0.0
        {
            nodes.pop();
        }
        if nodes.len() != before {
            tracing::debug!(
                "collapsed {} trailing zero-damage range nodes",
                before - nodes.len()
            );
        }

        Ok(Self { nodes, spread })
    }

    pub fn nodes(&self) -> &[RangeNode] {
        &self.nodes
    }

    pub fn spread(&self) -> Option<&Attribute> {
        self.spread.as_ref()
    }

    /// Concrete breakpoints under the given modifiers.
    pub fn breakpoints(&self, modifiers: &[Modifier]) -> Vec<f64> {
        self.nodes
            .iter()
            .map(|node| node.start().value(modifiers))
            .collect()
    }

    fn spread_degrees(&self, modifiers: &[Modifier]) -> Option<f64> {
        self.spread.as_ref().map(|spread| spread.value(modifiers))
    }

    /// Damage multiplier at `range`, including spread accuracy.
    pub fn range_effectiveness(&self, range: f64, modifiers: &[Modifier]) -> f64 {
        let breakpoints = self.breakpoints(modifiers);
        let spread = self.spread_degrees(modifiers);
        self.effectiveness_at(range, &breakpoints, spread)
    }

    fn effectiveness_at(&self, range: f64, breakpoints: &[f64], spread: Option<f64>) -> f64 {
        // None stands for the head (-inf) and tail (+inf) sentinels.
        let mut start = None;
        let mut end = None;
        for (index, &at) in breakpoints.iter().enumerate() {
            if at <= range {
                start = Some(index);
            } else {
                end = Some(index);
                break;
            }
        }

        let damage = match (start, end) {
            (Some(i), None) => {
                if range == breakpoints[i] {
                    self.nodes[i].damage_multiplier()
                } else {
                    0.0
                }
            }
            (Some(i), Some(j)) => {
                let from = &self.nodes[i];
                let to = &self.nodes[j];
                let t = (range - breakpoints[i]) / (breakpoints[j] - breakpoints[i]);
                from.interpolation()
                    .interpolate(from.damage_multiplier(), to.damage_multiplier(), t)
            }
            // Head sentinel steps at multiplier zero.
            (None, _) => 0.0,
        };

        match spread {
            Some(spread) => damage * spread::spread_factor(range, spread),
            None => damage,
        }
    }

    /// Start of the last breakpoint; zero for an empty profile.
    pub fn max_range(&self, modifiers: &[Modifier]) -> f64 {
        self.nodes
            .last()
            .map(|node| node.start().value(modifiers))
            .unwrap_or(0.0)
    }

    /// Span of the first contiguous run of nodes with the highest multiplier.
    pub fn optimal_range(&self, modifiers: &[Modifier]) -> RangeSpan {
        let Some(peak) = self
            .nodes
            .iter()
            .map(RangeNode::damage_multiplier)
            .reduce(f64::max)
        else {
            return RangeSpan::EMPTY;
        };

        let Some(first) = self
            .nodes
            .iter()
            .position(|node| node.damage_multiplier() == peak)
        else {
            return RangeSpan::EMPTY;
        };
        let last = self.nodes[first..]
            .iter()
            .take_while(|node| node.damage_multiplier() == peak)
            .count()
            + first
            - 1;

        RangeSpan::new(
            self.nodes[first].start().value(modifiers),
            self.nodes[last].start().value(modifiers),
        )
    }

    /// Longest span where effectiveness stays at or above `percentile` of the
    /// peak, sampled every [`EngineConfig::RANGE_SAMPLE_STEP`] units.
    pub fn percentile_range(&self, percentile: f64, modifiers: &[Modifier]) -> RangeSpan {
        self.percentile_range_with_step(percentile, EngineConfig::RANGE_SAMPLE_STEP, modifiers)
    }

    /// [`Self::percentile_range`] with an explicit sampling step.
    pub fn percentile_range_with_step(
        &self,
        percentile: f64,
        step: f64,
        modifiers: &[Modifier],
    ) -> RangeSpan {
        let breakpoints = self.breakpoints(modifiers);
        let spread = self.spread_degrees(modifiers);
        let samples = self.sample_points(step, &breakpoints);

        let effectiveness: Vec<f64> = samples
            .iter()
            .map(|&range| self.effectiveness_at(range, &breakpoints, spread))
            .collect();

        let peak = effectiveness.iter().copied().fold(0.0, f64::max);
        if peak <= 0.0 {
            return RangeSpan::EMPTY;
        }
        let threshold = percentile * peak;

        let mut best: Option<RangeSpan> = None;
        let mut run_start: Option<usize> = None;
        for index in 0..=samples.len() {
            let qualifies = effectiveness
                .get(index)
                .is_some_and(|&value| value >= threshold);
            match (qualifies, run_start) {
                (true, None) => run_start = Some(index),
                (false, Some(first)) => {
                    let span = RangeSpan::new(samples[first], samples[index - 1]);
                    if best.is_none_or(|b| span.length() > b.length()) {
                        best = Some(span);
                    }
                    run_start = None;
                }
                _ => {}
            }
        }

        best.unwrap_or(RangeSpan::EMPTY)
    }

    /// Sample ranges in `[0, max]`: a regular grid plus the point just before
    /// and at every STEP transition, sorted and deduplicated.
    fn sample_points(&self, step: f64, breakpoints: &[f64]) -> Vec<f64> {
        const BEFORE_BREAKPOINT: f64 = 1e-6;

        let Some(&max) = breakpoints.last() else {
            return Vec::new();
        };
        if !max.is_finite() || max < 0.0 {
            return Vec::new();
        }

        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            tracing::warn!(
                "invalid range sample step {}, using {}",
                step,
                EngineConfig::RANGE_SAMPLE_STEP
            );
            EngineConfig::RANGE_SAMPLE_STEP
        };

        let mut samples = Vec::new();
        let mut index = 0u32;
        loop {
            let range = f64::from(index) * step;
            if range > max {
                break;
            }
            samples.push(range);
            index += 1;
        }
        samples.push(max);

        for (node, window) in self.nodes.iter().zip(breakpoints.windows(2)) {
            if node.interpolation() == Interpolation::Step {
                let transition = window[1];
                samples.push(transition - BEFORE_BREAKPOINT);
                samples.push(transition);
            }
        }

        samples.retain(|&range| range >= 0.0 && range <= max);
        samples.sort_by(f64::total_cmp);
        samples.dedup();
        samples
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::modifier::{ModifierDescription, Operation, Selectors, Specifier};

    fn at(range: f64) -> Attribute {
        Attribute::new(range, ["laser"], Some("range"))
    }

    fn plateau() -> WeaponRangeProfile {
        WeaponRangeProfile::new(
            vec![
                RangeNode::linear(at(0.0), 1.0),
                RangeNode::linear(at(100.0), 1.0),
                RangeNode::linear(at(200.0), 0.0),
            ],
            None,
        )
        .unwrap()
    }

    fn range_bonus(value: f64) -> Modifier {
        Modifier::new(
            Arc::new(
                ModifierDescription::builder("laser_range", "Laser Range")
                    .selectors(Selectors::tags(["laser"]))
                    .specifier(Specifier::named("range"))
                    .operation(Operation::Mul)
                    .build(),
            ),
            value,
        )
    }

    #[test]
    fn linear_plateau_effectiveness() {
        let profile = plateau();
        assert_eq!(profile.range_effectiveness(50.0, Modifier::NONE), 1.0);
        assert_eq!(profile.range_effectiveness(150.0, Modifier::NONE), 0.5);
        assert_eq!(profile.range_effectiveness(250.0, Modifier::NONE), 0.0);
    }

    #[test]
    fn exactly_at_last_node_returns_its_multiplier() {
        let profile = WeaponRangeProfile::new(
            vec![RangeNode::step(at(0.0), 1.0), RangeNode::step(at(300.0), 0.4)],
            None,
        )
        .unwrap();
        assert_eq!(profile.range_effectiveness(300.0, Modifier::NONE), 0.4);
        assert_eq!(profile.range_effectiveness(300.5, Modifier::NONE), 0.0);
    }

    #[test]
    fn below_first_node_is_zero() {
        let profile = WeaponRangeProfile::new(
            vec![RangeNode::step(at(90.0), 1.0), RangeNode::step(at(500.0), 0.0)],
            None,
        )
        .unwrap();
        assert_eq!(profile.range_effectiveness(50.0, Modifier::NONE), 0.0);
        assert_eq!(profile.range_effectiveness(90.0, Modifier::NONE), 1.0);
    }

    #[test]
    fn step_holds_until_next_breakpoint() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::step(at(0.0), 1.0),
                RangeNode::step(at(100.0), 0.5),
                RangeNode::step(at(200.0), 0.0),
            ],
            None,
        )
        .unwrap();
        assert_eq!(profile.range_effectiveness(99.999, Modifier::NONE), 1.0);
        assert_eq!(profile.range_effectiveness(100.0, Modifier::NONE), 0.5);
        assert_eq!(profile.range_effectiveness(199.0, Modifier::NONE), 0.5);
    }

    #[test]
    fn exponential_falloff() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::new(at(0.0), InterpolationType::Exponential, 1.0, Some(2.0)).unwrap(),
                RangeNode::linear(at(100.0), 0.0),
            ],
            None,
        )
        .unwrap();
        // 1 + (0 - 1) × 0.5² = 0.75
        assert_eq!(profile.range_effectiveness(50.0, Modifier::NONE), 0.75);
    }

    #[test]
    fn range_modifiers_move_breakpoints() {
        let profile = plateau();
        let bonus = [range_bonus(0.5)];
        // Breakpoints become 0, 150, 300
        assert_eq!(profile.breakpoints(&bonus), vec![0.0, 150.0, 300.0]);
        assert_eq!(profile.range_effectiveness(150.0, &bonus), 1.0);
        assert_eq!(profile.range_effectiveness(225.0, &bonus), 0.5);
        assert_eq!(profile.max_range(&bonus), 300.0);
    }

    #[test]
    fn trailing_zero_nodes_collapse() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::step(at(0.0), 1.0),
                RangeNode::step(at(400.0), 0.0),
                RangeNode::step(at(600.0), 0.0),
                RangeNode::step(at(800.0), 0.0),
            ],
            None,
        )
        .unwrap();
        assert_eq!(profile.nodes().len(), 2);
        assert_eq!(profile.max_range(Modifier::NONE), 400.0);
    }

    #[test]
    fn interior_zero_nodes_are_kept() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::step(at(0.0), 0.0),
                RangeNode::step(at(90.0), 0.0),
                RangeNode::linear(at(180.0), 1.0),
                RangeNode::linear(at(400.0), 0.0),
            ],
            None,
        )
        .unwrap();
        assert_eq!(profile.nodes().len(), 4);
    }

    #[test]
    fn unsorted_nodes_are_rejected() {
        let err = WeaponRangeProfile::new(
            vec![RangeNode::step(at(100.0), 1.0), RangeNode::step(at(50.0), 0.0)],
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RangeProfileError::Unsorted {
                previous: 100.0,
                next: 50.0
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn optimal_range_spans_peak_run() {
        let profile = plateau();
        assert_eq!(
            profile.optimal_range(Modifier::NONE),
            RangeSpan::new(0.0, 100.0)
        );
    }

    #[test]
    fn optimal_range_uses_first_peak_run() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::linear(at(0.0), 0.5),
                RangeNode::linear(at(100.0), 1.0),
                RangeNode::linear(at(200.0), 1.0),
                RangeNode::linear(at(300.0), 0.5),
                RangeNode::linear(at(400.0), 1.0),
                RangeNode::linear(at(500.0), 0.0),
            ],
            None,
        )
        .unwrap();
        assert_eq!(
            profile.optimal_range(Modifier::NONE),
            RangeSpan::new(100.0, 200.0)
        );
    }

    #[test]
    fn empty_profile_queries_are_well_defined() {
        let profile = WeaponRangeProfile::new(Vec::new(), None).unwrap();
        assert_eq!(profile.max_range(Modifier::NONE), 0.0);
        assert_eq!(profile.range_effectiveness(10.0, Modifier::NONE), 0.0);
        assert_eq!(profile.optimal_range(Modifier::NONE), RangeSpan::EMPTY);
        assert_eq!(profile.percentile_range(0.5, Modifier::NONE), RangeSpan::EMPTY);
    }

    #[test]
    fn zero_damage_profile_has_empty_percentile_range() {
        let profile = WeaponRangeProfile::new(
            vec![RangeNode::step(at(0.0), 0.0), RangeNode::step(at(100.0), 0.0)],
            None,
        )
        .unwrap();
        assert!(profile.percentile_range(0.9, Modifier::NONE).is_empty());
    }

    #[test]
    fn percentile_range_on_linear_falloff() {
        let profile = plateau();
        // 1.0 until 100, then linear to 0 at 200: >= 0.5 holds on [0, 150]
        assert_eq!(
            profile.percentile_range(0.5, Modifier::NONE),
            RangeSpan::new(0.0, 150.0)
        );
        assert_eq!(
            profile.percentile_range(1.0, Modifier::NONE),
            RangeSpan::new(0.0, 100.0)
        );
    }

    #[test]
    fn percentile_range_captures_step_discontinuity() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::step(at(0.0), 1.0),
                RangeNode::step(at(95.0), 0.2),
                RangeNode::step(at(200.0), 0.0),
            ],
            None,
        )
        .unwrap();
        let span = profile.percentile_range(0.9, Modifier::NONE);
        assert_eq!(span.start, 0.0);
        assert!((span.end - 95.0).abs() < 1e-3, "got {span:?}");
        assert!(span.end < 95.0);
    }

    #[test]
    fn percentile_range_prefers_longest_run() {
        let profile = WeaponRangeProfile::new(
            vec![
                RangeNode::step(at(0.0), 1.0),
                RangeNode::step(at(20.0), 0.0),
                RangeNode::step(at(100.0), 1.0),
                RangeNode::step(at(300.0), 0.0),
            ],
            None,
        )
        .unwrap();
        let span = profile.percentile_range_with_step(0.9, 10.0, Modifier::NONE);
        assert_eq!(span.start, 100.0);
        assert!(span.end < 300.0 && span.end > 299.0, "got {span:?}");
    }

    #[test]
    fn spread_reduces_effectiveness() {
        let profile = WeaponRangeProfile::new(
            vec![RangeNode::linear(at(0.0), 1.0), RangeNode::linear(at(1000.0), 1.0)],
            Some(Attribute::new(1.0, ["laser"], Some("spread"))),
        )
        .unwrap();
        let near = profile.range_effectiveness(100.0, Modifier::NONE);
        let far = profile.range_effectiveness(600.0, Modifier::NONE);
        assert!(near < 1.0 && near > far);
        assert!((far - spread::spread_factor(600.0, 1.0)).abs() < 1e-15);
    }

    #[test]
    fn span_helpers() {
        let span = RangeSpan::new(90.0, 270.0);
        assert_eq!(span.length(), 180.0);
        assert!(span.contains(90.0) && span.contains(270.0));
        assert!(!span.contains(271.0));
        assert!(RangeSpan::EMPTY.is_empty());
    }
}
