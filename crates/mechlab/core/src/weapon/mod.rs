//! Weapons: one data record plus a tagged kind.
//!
//! Behavior that differs between weapon families is carried by
//! [`WeaponKind`] instead of a type hierarchy:
//!
//! - **Energy**: burn time adds to the firing cycle
//! - **Ballistic**: consumes ammo, may double-fire and jam
//! - **Missile**: consumes ammo
//!
//! Everything else (heat, cooldown, range profile, ghost heat) is shared.

pub mod fire_rate;
pub mod stat;

pub use fire_rate::{JamProfile, mean_seconds_per_shot};
pub use stat::{StatExpr, StatExprError, StatSource, StatTerm};

use crate::attribute::Attribute;
use crate::ghost_heat::{FiredWeapon, GhostHeatRule};
use crate::item::{ItemId, ItemInfo};
use crate::modifier::Modifier;
use crate::range::{RangeSpan, WeaponRangeProfile};

/// Ammunition consumed per shot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoRequirement {
    pub ammo_type: String,
    pub rounds_per_shot: u32,
}

impl AmmoRequirement {
    pub fn new(ammo_type: impl Into<String>, rounds_per_shot: u32) -> Self {
        Self {
            ammo_type: ammo_type.into(),
            rounds_per_shot,
        }
    }
}

/// Family-specific weapon data.
#[derive(Clone, Debug, PartialEq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponKind {
    Energy {
        /// Seconds the beam stays on target.
        burn_time: Attribute,
    },
    Ballistic {
        ammo: AmmoRequirement,
        jam: Option<JamProfile>,
    },
    Missile {
        ammo: AmmoRequirement,
    },
}

/// A weapon type as described by equipment data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub info: ItemInfo,
    pub heat: Attribute,
    pub cooldown: Attribute,
    pub damage_per_projectile: f64,
    pub projectiles_per_round: u32,
    pub rounds_per_shot: u32,
    /// Seconds between rounds of one shot.
    pub volley_delay: f64,
    pub projectile_speed: Attribute,
    pub range: WeaponRangeProfile,
    pub ghost_heat: GhostHeatRule,
    pub kind: WeaponKind,
}

impl Weapon {
    pub fn id(&self) -> ItemId {
        self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn mass(&self) -> f64 {
        self.info.mass
    }

    pub fn slots(&self) -> u32 {
        self.info.slots
    }

    pub fn ammo(&self) -> Option<&AmmoRequirement> {
        match &self.kind {
            WeaponKind::Ballistic { ammo, .. } | WeaponKind::Missile { ammo } => Some(ammo),
            WeaponKind::Energy { .. } => None,
        }
    }

    pub fn jam(&self) -> Option<&JamProfile> {
        match &self.kind {
            WeaponKind::Ballistic { jam, .. } => jam.as_ref(),
            _ => None,
        }
    }

    /// Damage of one trigger pull at full effectiveness.
    pub fn damage_per_shot(&self) -> f64 {
        self.damage_per_projectile
            * f64::from(self.projectiles_per_round)
            * f64::from(self.rounds_per_shot)
    }

    pub fn heat(&self, modifiers: &[Modifier]) -> f64 {
        self.heat.value(modifiers)
    }

    pub fn cooldown(&self, modifiers: &[Modifier]) -> f64 {
        self.cooldown.value(modifiers)
    }

    pub fn projectile_speed(&self, modifiers: &[Modifier]) -> f64 {
        self.projectile_speed.value(modifiers)
    }

    /// Length of one firing cycle ignoring jams and double-fire.
    ///
    /// ```text
    /// cooldown + (rounds_per_shot - 1) × volley_delay [+ burn_time]
    /// ```
    pub fn raw_seconds_per_shot(&self, modifiers: &[Modifier]) -> f64 {
        let volley = f64::from(self.rounds_per_shot.saturating_sub(1)) * self.volley_delay;
        let cycle = self.cooldown(modifiers) + volley;
        match &self.kind {
            WeaponKind::Energy { burn_time } => cycle + burn_time.value(modifiers),
            _ => cycle,
        }
    }

    /// Expected seconds per shot, accounting for double-fire and jams.
    pub fn seconds_per_shot(&self, modifiers: &[Modifier]) -> f64 {
        let raw = self.raw_seconds_per_shot(modifiers);
        match self.jam() {
            Some(jam) => jam.mean_seconds_per_shot(raw, modifiers),
            None => raw,
        }
    }

    pub fn range_effectiveness(&self, range: f64, modifiers: &[Modifier]) -> f64 {
        self.range.range_effectiveness(range, modifiers)
    }

    pub fn range_max(&self, modifiers: &[Modifier]) -> f64 {
        self.range.max_range(modifiers)
    }

    pub fn range_optimal(&self, modifiers: &[Modifier]) -> RangeSpan {
        self.range.optimal_range(modifiers)
    }

    /// Damage per second at `range`.
    pub fn dps(&self, range: f64, modifiers: &[Modifier]) -> f64 {
        self.damage_per_shot() * self.range_effectiveness(range, modifiers)
            / self.seconds_per_shot(modifiers)
    }

    /// Heat per second when fired continuously.
    pub fn hps(&self, modifiers: &[Modifier]) -> f64 {
        self.heat(modifiers) / self.seconds_per_shot(modifiers)
    }

    /// Evaluates a stat expression such as `"d/s"` against this weapon.
    pub fn stat(&self, expression: &str, modifiers: &[Modifier]) -> Result<f64, StatExprError> {
        let expr: StatExpr = expression.parse()?;
        Ok(expr.evaluate(self, modifiers))
    }

    /// Ghost heat input for one instance of this weapon in an alpha strike.
    pub fn fired(&self, modifiers: &[Modifier]) -> FiredWeapon {
        FiredWeapon {
            weapon: self.id(),
            rule: self.ghost_heat,
            base_heat: self.heat.base_value(),
            heat: self.heat(modifiers),
        }
    }
}

impl StatSource for Weapon {
    fn stat_term(&self, term: StatTerm, modifiers: &[Modifier]) -> f64 {
        match term {
            StatTerm::Damage => self.damage_per_shot(),
            StatTerm::Seconds => self.seconds_per_shot(modifiers),
            StatTerm::Mass => self.mass(),
            StatTerm::Heat => self.heat(modifiers),
            StatTerm::Slots => f64::from(self.slots()),
        }
    }
}
