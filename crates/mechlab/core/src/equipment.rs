//! Heat sinks and engines.

use crate::attribute::Attribute;
use crate::config::EngineConfig;
use crate::item::{ItemId, ItemInfo};
use crate::modifier::Modifier;
use crate::modifier::names::SEL_MOVEMENT_MAX_SPEED;

/// A heat sink type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatSink {
    pub info: ItemInfo,
    /// Heat removed per second.
    pub dissipation: Attribute,
    /// Heat capacity added to the chassis.
    pub capacity: Attribute,
}

impl HeatSink {
    pub fn id(&self) -> ItemId {
        self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn dissipation(&self, modifiers: &[Modifier]) -> f64 {
        self.dissipation.value(modifiers)
    }

    pub fn capacity(&self, modifiers: &[Modifier]) -> f64 {
        self.capacity.value(modifiers)
    }
}

/// An engine type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Engine {
    pub info: ItemInfo,
    pub rating: u32,
    /// Heat sinks built into the engine.
    pub internal_heat_sinks: u32,
}

impl Engine {
    pub fn id(&self) -> ItemId {
        self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Top speed of a chassis of `chassis_mass` tons.
    ///
    /// ```text
    /// speed = SPEED_FACTOR × rating / mass, scaled by speed modifiers
    /// ```
    pub fn top_speed(&self, chassis_mass: f64, modifiers: &[Modifier]) -> f64 {
        if chassis_mass <= 0.0 {
            return 0.0;
        }
        let factor = Attribute::new(EngineConfig::SPEED_FACTOR, [SEL_MOVEMENT_MAX_SPEED], None);
        factor.value(modifiers) * f64::from(self.rating) / chassis_mass
    }
}
