//! Rate of fire for weapons that double-fire and may jam.
//!
//! Such a weapon fires `extra_shots_per_burst` additional rounds inside one
//! cooldown window, and with `jam_probability` jams for `jam_duration`
//! seconds instead. The expected time per shot is closed form:
//!
//! ```text
//!                     jam_duration × jam_probability + raw_cooldown
//! seconds/shot = ─────────────────────────────────────────────────────────────
//!                (1 - jam_probability) × (1 + extra_shots) + jam_probability
//! ```

use crate::attribute::Attribute;
use crate::modifier::Modifier;

/// Expected seconds per shot of a double-fire weapon.
///
/// Evaluated in exactly the order of the formula above so results stay
/// bit-for-bit comparable with reference data.
pub fn mean_seconds_per_shot(
    raw_cooldown: f64,
    jam_duration: f64,
    jam_probability: f64,
    extra_shots_per_burst: u32,
) -> f64 {
    (jam_duration * jam_probability + raw_cooldown)
        / ((1.0 - jam_probability) * (1.0 + f64::from(extra_shots_per_burst)) + jam_probability)
}

/// Jam behavior of a double-fire weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JamProfile {
    /// Chance of jamming per burst, as a fraction.
    pub probability: Attribute,
    /// Seconds lost to a jam.
    pub duration: Attribute,
    pub extra_shots_per_burst: u32,
}

impl JamProfile {
    pub fn new(probability: Attribute, duration: Attribute, extra_shots_per_burst: u32) -> Self {
        Self {
            probability,
            duration,
            extra_shots_per_burst,
        }
    }

    /// Expected seconds per shot given the weapon's raw cooldown.
    pub fn mean_seconds_per_shot(&self, raw_cooldown: f64, modifiers: &[Modifier]) -> f64 {
        mean_seconds_per_shot(
            raw_cooldown,
            self.duration.value(modifiers),
            self.probability.value(modifiers),
            self.extra_shots_per_burst,
        )
    }
}
