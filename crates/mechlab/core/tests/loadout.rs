//! Loadout metrics over a small laser boat.

mod common;

use std::sync::Arc;

use common::{assert_close, engine, heat_sink, medium_laser, modifier, ultra_autocannon};
use mechlab_core::{Loadout, Modifier, Operation, Repository};

/// 50 ton chassis, STD 300 with ten internal sinks, two external sinks and
/// three medium lasers.
fn laser_boat() -> Loadout {
    let laser = Arc::new(medium_laser());
    let sink = Arc::new(heat_sink());
    Loadout::new(50.0)
        .with_engine(Arc::new(engine(300)), Arc::clone(&sink))
        .with_heat_sink(Arc::clone(&sink))
        .with_heat_sink(sink)
        .with_weapon(Arc::clone(&laser))
        .with_weapon(Arc::clone(&laser))
        .with_weapon(laser)
}

#[test]
fn damage_metrics_sum_over_weapons() {
    let loadout = laser_boat();

    assert_eq!(loadout.alpha_strike(100.0, Modifier::NONE), 15.0);
    assert_close(loadout.alpha_strike(405.0, Modifier::NONE), 7.5);
    assert_close(loadout.max_dps(100.0, Modifier::NONE), 3.0);
}

#[test]
fn heat_metrics_include_engine_sinks() {
    let loadout = laser_boat();

    assert_close(loadout.heat_generation(Modifier::NONE), 2.4);
    assert_close(loadout.heat_dissipation(Modifier::NONE), 1.2);
    assert_close(loadout.heat_capacity(Modifier::NONE), 42.0);
    assert_close(loadout.time_to_overheat(Modifier::NONE).unwrap(), 35.0);
}

#[test]
fn third_laser_triggers_ghost_heat() {
    let loadout = laser_boat();

    // HEAT_SCALE[3] × multiplier 1 × heat 4
    assert_close(loadout.ghost_heat(Modifier::NONE), 0.72);
    assert_close(loadout.alpha_heat(Modifier::NONE), 12.72);

    let cooler = [modifier(&["laser"], Some("heat"), Operation::Mul, -0.5)];
    assert_close(loadout.ghost_heat(&cooler), 0.36);
}

#[test]
fn exempt_weapons_add_no_ghost_heat() {
    let uac = Arc::new(ultra_autocannon());
    let loadout = (0..6).fold(Loadout::new(75.0), |l, _| l.with_weapon(Arc::clone(&uac)));
    assert_eq!(loadout.ghost_heat(Modifier::NONE), 0.0);
}

#[test]
fn heat_neutral_loadout_never_overheats() {
    let loadout = Loadout::new(50.0).with_heat_sink(Arc::new(heat_sink()));
    assert_eq!(loadout.time_to_overheat(Modifier::NONE), None);
}

#[test]
fn dissipation_modifiers_apply_to_every_sink() {
    let loadout = laser_boat();
    let mods = [modifier(&["heatdissipation"], None, Operation::Mul, 0.1)];
    assert_close(loadout.heat_dissipation(&mods), 1.32);

    let capacity = [modifier(&["heatlimit"], None, Operation::Add, 5.0)];
    // base 30 and each of 12 sinks gain 5
    assert_close(loadout.heat_capacity(&capacity), 42.0 + 13.0 * 5.0);
}

#[test]
fn top_speed_needs_an_engine() {
    assert_close(laser_boat().top_speed(Modifier::NONE), 97.2);
    assert_eq!(Loadout::new(50.0).top_speed(Modifier::NONE), 0.0);
}

#[test]
fn snapshot_matches_individual_metrics() {
    let loadout = laser_boat();
    let metrics = loadout.metrics(100.0, Modifier::NONE);

    assert_eq!(metrics.range, 100.0);
    assert_eq!(metrics.alpha_strike, loadout.alpha_strike(100.0, Modifier::NONE));
    assert_eq!(metrics.alpha_heat, loadout.alpha_heat(Modifier::NONE));
    assert_eq!(metrics.time_to_overheat, loadout.time_to_overheat(Modifier::NONE));
}

#[test]
fn repository_items_fit_into_loadouts() {
    let repo = Repository::builder()
        .weapon(medium_laser())
        .and_then(|b| b.heat_sink(heat_sink()))
        .and_then(|b| b.engine(engine(300)))
        .expect("unique items")
        .build();

    let laser = repo.weapon_by_name("medium laser").expect("laser");
    let sink = repo.heat_sink_by_name("Heat Sink").expect("sink");
    let engine = repo.engine_by_name("std engine 300").expect("engine");

    let loadout = Loadout::new(50.0)
        .with_engine(Arc::clone(engine), Arc::clone(sink))
        .with_weapon(Arc::clone(laser));

    assert_close(loadout.heat_dissipation(Modifier::NONE), 1.0);
    assert_eq!(loadout.weapons().len(), 1);
}
