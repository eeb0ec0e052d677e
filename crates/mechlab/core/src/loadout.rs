//! Loadout metrics - aggregates over equipped items.
//!
//! A [`Loadout`] holds shared references to repository items and computes
//! figures for the whole vehicle. Every metric is a pure function of the
//! loadout and the active modifiers; nothing is cached.
//!
//! # Metrics
//!
//! - **Alpha strike**: damage of firing every weapon once at a range
//! - **Max DPS**: damage per second of all weapons firing continuously
//! - **Heat generation / dissipation**: heat per second in and out
//! - **Ghost heat**: alpha strike surcharge, see [`crate::ghost_heat`]
//! - **Time to overheat**: capacity over net heat per second

use std::sync::Arc;

use crate::attribute::Attribute;
use crate::equipment::{Engine, HeatSink};
use crate::ghost_heat;
use crate::modifier::Modifier;
use crate::modifier::names::SEL_HEAT_LIMIT;
use crate::weapon::Weapon;

/// Equipment fitted to one chassis.
#[derive(Clone, Debug)]
pub struct Loadout {
    chassis_mass: f64,
    base_heat_capacity: f64,
    engine: Option<Arc<Engine>>,
    /// Heat sink type of the engine's built-in sinks.
    engine_heat_sink: Option<Arc<HeatSink>>,
    weapons: Vec<Arc<Weapon>>,
    heat_sinks: Vec<Arc<HeatSink>>,
}

impl Loadout {
    /// Heat capacity of a chassis before heat sinks.
    pub const DEFAULT_BASE_HEAT_CAPACITY: f64 = 30.0;

    pub fn new(chassis_mass: f64) -> Self {
        Self {
            chassis_mass,
            base_heat_capacity: Self::DEFAULT_BASE_HEAT_CAPACITY,
            engine: None,
            engine_heat_sink: None,
            weapons: Vec::new(),
            heat_sinks: Vec::new(),
        }
    }

    /// Fits an engine whose internal heat sinks are of type `heat_sink`.
    pub fn with_engine(mut self, engine: Arc<Engine>, heat_sink: Arc<HeatSink>) -> Self {
        self.engine = Some(engine);
        self.engine_heat_sink = Some(heat_sink);
        self
    }

    pub fn with_base_heat_capacity(mut self, capacity: f64) -> Self {
        self.base_heat_capacity = capacity;
        self
    }

    pub fn with_weapon(mut self, weapon: Arc<Weapon>) -> Self {
        self.weapons.push(weapon);
        self
    }

    pub fn with_heat_sink(mut self, heat_sink: Arc<HeatSink>) -> Self {
        self.heat_sinks.push(heat_sink);
        self
    }

    pub fn chassis_mass(&self) -> f64 {
        self.chassis_mass
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_deref()
    }

    pub fn weapons(&self) -> &[Arc<Weapon>] {
        &self.weapons
    }

    pub fn heat_sinks(&self) -> &[Arc<HeatSink>] {
        &self.heat_sinks
    }

    /// All heat sinks including the engine's built-in ones.
    fn all_heat_sinks(&self) -> impl Iterator<Item = &HeatSink> {
        let internal = self
            .engine
            .as_ref()
            .map_or(0, |engine| engine.internal_heat_sinks as usize);
        let engine_sinks = self
            .engine_heat_sink
            .iter()
            .flat_map(move |sink| std::iter::repeat_n(&**sink, internal));
        self.heat_sinks.iter().map(|sink| &**sink).chain(engine_sinks)
    }

    /// Damage of firing every weapon once at `range`.
    pub fn alpha_strike(&self, range: f64, modifiers: &[Modifier]) -> f64 {
        self.weapons
            .iter()
            .map(|w| w.damage_per_shot() * w.range_effectiveness(range, modifiers))
            .sum()
    }

    /// Damage per second of all weapons firing continuously at `range`.
    pub fn max_dps(&self, range: f64, modifiers: &[Modifier]) -> f64 {
        self.weapons.iter().map(|w| w.dps(range, modifiers)).sum()
    }

    pub fn heat_generation(&self, modifiers: &[Modifier]) -> f64 {
        self.weapons.iter().map(|w| w.hps(modifiers)).sum()
    }

    pub fn heat_dissipation(&self, modifiers: &[Modifier]) -> f64 {
        self.all_heat_sinks()
            .map(|sink| sink.dissipation(modifiers))
            .sum()
    }

    pub fn heat_capacity(&self, modifiers: &[Modifier]) -> f64 {
        let base = Attribute::new(self.base_heat_capacity, [SEL_HEAT_LIMIT], None);
        base.value(modifiers)
            + self
                .all_heat_sinks()
                .map(|sink| sink.capacity(modifiers))
                .sum::<f64>()
    }

    /// Ghost heat of firing every weapon together.
    pub fn ghost_heat(&self, modifiers: &[Modifier]) -> f64 {
        ghost_heat::calculate(self.weapons.iter().map(|w| w.fired(modifiers)))
    }

    /// Total heat of an alpha strike, ghost heat included.
    pub fn alpha_heat(&self, modifiers: &[Modifier]) -> f64 {
        let listed: f64 = self.weapons.iter().map(|w| w.heat(modifiers)).sum();
        listed + self.ghost_heat(modifiers)
    }

    /// Seconds of continuous fire until the heat capacity is exhausted.
    ///
    /// Returns `None` when dissipation keeps up with generation.
    pub fn time_to_overheat(&self, modifiers: &[Modifier]) -> Option<f64> {
        let net = self.heat_generation(modifiers) - self.heat_dissipation(modifiers);
        (net > 0.0).then(|| self.heat_capacity(modifiers) / net)
    }

    pub fn top_speed(&self, modifiers: &[Modifier]) -> f64 {
        self.engine
            .as_ref()
            .map(|engine| engine.top_speed(self.chassis_mass, modifiers))
            .unwrap_or(0.0)
    }

    /// Evaluates every metric at `range`.
    pub fn metrics(&self, range: f64, modifiers: &[Modifier]) -> LoadoutMetrics {
        LoadoutMetrics {
            range,
            alpha_strike: self.alpha_strike(range, modifiers),
            max_dps: self.max_dps(range, modifiers),
            heat_generation: self.heat_generation(modifiers),
            heat_dissipation: self.heat_dissipation(modifiers),
            heat_capacity: self.heat_capacity(modifiers),
            ghost_heat: self.ghost_heat(modifiers),
            alpha_heat: self.alpha_heat(modifiers),
            time_to_overheat: self.time_to_overheat(modifiers),
            top_speed: self.top_speed(modifiers),
        }
    }
}

/// Snapshot of all loadout metrics at one range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadoutMetrics {
    pub range: f64,
    pub alpha_strike: f64,
    pub max_dps: f64,
    pub heat_generation: f64,
    pub heat_dissipation: f64,
    pub heat_capacity: f64,
    pub ghost_heat: f64,
    pub alpha_heat: f64,
    pub time_to_overheat: Option<f64>,
    pub top_speed: f64,
}
