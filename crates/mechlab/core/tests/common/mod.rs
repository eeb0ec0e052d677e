//! Shared fixtures for mechlab-core integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use mechlab_core::{
    AmmoRequirement, Attribute, Engine, GhostHeatRule, HeatSink, ItemId, ItemInfo, JamProfile,
    Modifier, ModifierDescription, Operation, RangeNode, Selectors, Specifier, Weapon, WeaponKind,
    WeaponRangeProfile,
};

pub const LASER_TAGS: [&str; 3] = ["energy", "laser", "mediumlaser"];
pub const UAC_TAGS: [&str; 3] = ["ballistic", "autocannon", "ultraautocannon5"];

pub fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(close(actual, expected), "expected {expected}, got {actual}");
}

fn attr(base: f64, tags: &[&str], specifier: &str) -> Attribute {
    Attribute::new(base, tags.iter().copied(), Some(specifier))
}

/// 5 damage, 4 heat, 4s cooldown plus 1s burn, full damage to 270 then
/// linear falloff to 540.
pub fn medium_laser() -> Weapon {
    let tags = &LASER_TAGS;
    Weapon {
        info: ItemInfo::new(ItemId(1001), "Medium Laser", 1.0, 1),
        heat: attr(4.0, tags, "heat"),
        cooldown: attr(4.0, tags, "cooldown"),
        damage_per_projectile: 5.0,
        projectiles_per_round: 1,
        rounds_per_shot: 1,
        volley_delay: 0.0,
        projectile_speed: attr(0.0, tags, "velocity"),
        range: WeaponRangeProfile::new(
            vec![
                RangeNode::linear(attr(0.0, tags, "range"), 1.0),
                RangeNode::linear(attr(270.0, tags, "range"), 1.0),
                RangeNode::linear(attr(540.0, tags, "range"), 0.0),
            ],
            None,
        )
        .expect("sorted nodes"),
        ghost_heat: GhostHeatRule::new(GhostHeatRule::UNGROUPED, 2, 1.0),
        kind: WeaponKind::Energy {
            burn_time: attr(1.0, tags, "duration"),
        },
    }
}

/// Double-fire autocannon with a 4s cooldown, 10% jam chance and 2s jams.
pub fn ultra_autocannon() -> Weapon {
    let tags = &UAC_TAGS;
    Weapon {
        info: ItemInfo::new(ItemId(1208), "Ultra AC/5", 9.0, 5),
        heat: attr(1.0, tags, "heat"),
        cooldown: attr(4.0, tags, "cooldown"),
        damage_per_projectile: 5.0,
        projectiles_per_round: 1,
        rounds_per_shot: 1,
        volley_delay: 0.0,
        projectile_speed: attr(1100.0, tags, "velocity"),
        range: WeaponRangeProfile::new(
            vec![
                RangeNode::linear(attr(0.0, tags, "range"), 1.0),
                RangeNode::linear(attr(600.0, tags, "range"), 1.0),
                RangeNode::step(attr(1800.0, tags, "range"), 0.0),
            ],
            None,
        )
        .expect("sorted nodes"),
        ghost_heat: GhostHeatRule::exempt(),
        kind: WeaponKind::Ballistic {
            ammo: AmmoRequirement::new("ac5", 1),
            jam: Some(JamProfile::new(
                attr(0.1, tags, "jamchance"),
                attr(2.0, tags, "jamtime"),
                1,
            )),
        },
    }
}

pub fn heat_sink() -> HeatSink {
    HeatSink {
        info: ItemInfo::new(ItemId(3000), "Heat Sink", 1.0, 1),
        dissipation: Attribute::new(0.1, ["heatdissipation"], None),
        capacity: Attribute::new(1.0, ["heatlimit"], None),
    }
}

pub fn engine(rating: u32) -> Engine {
    Engine {
        info: ItemInfo::new(ItemId(3200 + rating), format!("STD Engine {rating}"), 15.0, 6),
        rating,
        internal_heat_sinks: 10,
    }
}

pub fn modifier(
    selectors: &[&str],
    specifier: Option<&str>,
    operation: Operation,
    value: f64,
) -> Modifier {
    let description = ModifierDescription::builder("test", "Test")
        .selectors(Selectors::tags(selectors.iter().copied()))
        .specifier(Specifier::parse(specifier))
        .operation(operation)
        .build();
    Modifier::new(Arc::new(description), value)
}
