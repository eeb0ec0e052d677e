//! Range breakpoints and the interpolation between them.

use super::RangeProfileError;
use crate::attribute::Attribute;
use crate::error::ModelError;

/// Interpolation tag as written in equipment data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InterpolationType {
    Step,
    Linear,
    Exponential,
}

impl InterpolationType {
    /// Parses interpolation text from static data.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        raw.trim()
            .parse()
            .map_err(|_| ModelError::UnknownInterpolation(raw.to_string()))
    }
}

/// Validated interpolation from one node to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Holds the current multiplier until the next breakpoint.
    Step,
    /// Straight line between the two multipliers.
    Linear,
    /// `from + (to - from) × t^exponent`.
    Exponential { exponent: f64 },
}

impl Interpolation {
    pub fn kind(&self) -> InterpolationType {
        match self {
            Self::Step => InterpolationType::Step,
            Self::Linear => InterpolationType::Linear,
            Self::Exponential { .. } => InterpolationType::Exponential,
        }
    }

    pub fn exponent(&self) -> Option<f64> {
        match self {
            Self::Exponential { exponent } => Some(*exponent),
            _ => None,
        }
    }

    /// Interpolates between `from` and `to` at fraction `t` of the interval.
    pub(crate) fn interpolate(&self, from: f64, to: f64, t: f64) -> f64 {
        match self {
            Self::Step => from,
            Self::Linear => from + (to - from) * t,
            Self::Exponential { exponent } => from + (to - from) * t.powf(*exponent),
        }
    }
}

/// One breakpoint of a [`super::WeaponRangeProfile`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeNode {
    start: Attribute,
    interpolation: Interpolation,
    damage_multiplier: f64,
}

impl RangeNode {
    /// Creates a node. `exponent` must be present for
    /// [`InterpolationType::Exponential`] and absent otherwise.
    pub fn new(
        start: Attribute,
        interpolation: InterpolationType,
        damage_multiplier: f64,
        exponent: Option<f64>,
    ) -> Result<Self, RangeProfileError> {
        let at = start.base_value();
        let interpolation = match (interpolation, exponent) {
            (InterpolationType::Exponential, Some(exponent)) if exponent.is_finite() => {
                Interpolation::Exponential { exponent }
            }
            (InterpolationType::Exponential, Some(exponent)) => {
                return Err(RangeProfileError::InvalidExponent { at, exponent });
            }
            (InterpolationType::Exponential, None) => {
                return Err(RangeProfileError::MissingExponent { at });
            }
            (kind, Some(exponent)) => {
                return Err(RangeProfileError::UnexpectedExponent { at, kind, exponent });
            }
            (InterpolationType::Step, None) => Interpolation::Step,
            (InterpolationType::Linear, None) => Interpolation::Linear,
        };

        Ok(Self {
            start,
            interpolation,
            damage_multiplier,
        })
    }

    pub fn step(start: Attribute, damage_multiplier: f64) -> Self {
        Self {
            start,
            interpolation: Interpolation::Step,
            damage_multiplier,
        }
    }

    pub fn linear(start: Attribute, damage_multiplier: f64) -> Self {
        Self {
            start,
            interpolation: Interpolation::Linear,
            damage_multiplier,
        }
    }

    pub fn start(&self) -> &Attribute {
        &self.start
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn damage_multiplier(&self) -> f64 {
        self.damage_multiplier
    }
}
