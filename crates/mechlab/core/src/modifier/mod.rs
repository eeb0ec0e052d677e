//! Modifiers - effects contributed by skills, quirks and equipped modules.
//!
//! A [`ModifierDescription`] is a shared, immutable rule saying which
//! attributes it targets and how it combines with them. A [`Modifier`] pairs a
//! description with a concrete value. Callers assemble a fresh list of active
//! modifiers for every evaluation; nothing here is cached.

pub mod description;
pub mod names;

pub use description::{ModifierDescription, ModifierDescriptionBuilder, Selectors, Specifier};

use std::fmt;
use std::sync::Arc;

/// How a modifier value combines with an attribute.
///
/// - **Add**: summed into the additive term
/// - **Mul**: summed into the multiplicative term (`1 + Σ`)
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Operation {
    #[default]
    #[strum(to_string = "add", serialize = "additive", serialize = "+")]
    Add,
    #[strum(to_string = "mul", serialize = "multiplicative", serialize = "*")]
    Mul,
}

impl Operation {
    /// Parses operation text from static data.
    pub fn parse(raw: &str) -> Result<Self, crate::error::ModelError> {
        raw.trim()
            .parse()
            .map_err(|_| crate::error::ModelError::UnknownOperation(raw.to_string()))
    }
}

/// Whether a positive modifier value helps the player.
///
/// Presentation only; it never changes how values are computed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ModifierType {
    /// Larger is better (e.g. range, dissipation).
    PositiveGood,
    /// Smaller is better (e.g. heat, cooldown).
    NegativeGood,
    /// Neither direction is clearly better.
    #[default]
    Indeterminate,
}

impl ModifierType {
    /// Parses modifier type text from static data.
    pub fn parse(raw: &str) -> Result<Self, crate::error::ModelError> {
        raw.trim()
            .parse()
            .map_err(|_| crate::error::ModelError::UnknownModifierType(raw.to_string()))
    }
}

/// A concrete modifier: a description plus a value.
///
/// For [`Operation::Add`] the value is a signed delta; for [`Operation::Mul`]
/// it is a signed fraction (`0.1` = +10%). Modifiers have value semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    description: Arc<ModifierDescription>,
    value: f64,
}

impl Modifier {
    /// Empty modifier list, for evaluating attributes at their base value.
    pub const NONE: &'static [Modifier] = &[];

    pub fn new(description: Arc<ModifierDescription>, value: f64) -> Self {
        Self { description, value }
    }

    pub fn description(&self) -> &ModifierDescription {
        &self.description
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `Some(true)` when this modifier benefits the player,
    /// `None` when its description is indeterminate.
    pub fn is_beneficial(&self) -> Option<bool> {
        match self.description.modifier_type() {
            ModifierType::PositiveGood => Some(self.value > 0.0),
            ModifierType::NegativeGood => Some(self.value < 0.0),
            ModifierType::Indeterminate => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.description.ui_name();
        match self.description.operation() {
            Operation::Add => write!(f, "{name}: {:+}", self.value),
            Operation::Mul => write!(f, "{name}: {:+}%", self.value * 100.0),
        }
    }
}
