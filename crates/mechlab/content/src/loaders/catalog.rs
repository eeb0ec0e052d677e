//! Equipment catalog loader.
//!
//! The catalog file lists modifier descriptions and every item type. Records
//! use plain numbers and strings; enumeration text (operations, interpolation
//! kinds, modifier types) is parsed here so that unknown values fail the load.

use std::path::Path;

use anyhow::Context;
use mechlab_core::modifier::names;
use mechlab_core::{
    AmmoRequirement, Attribute, Engine, GhostHeatRule, HeatSink, InterpolationType, ItemId,
    ItemInfo, JamProfile, ModifierDescription, ModifierType, Operation, RangeNode, Repository,
    Selectors, Specifier, Weapon, WeaponKind, WeaponRangeProfile,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub modifier_descriptions: Vec<ModifierDescriptionSpec>,
    #[serde(default)]
    pub weapons: Vec<WeaponSpec>,
    #[serde(default)]
    pub heat_sinks: Vec<HeatSinkSpec>,
    #[serde(default)]
    pub engines: Vec<EngineSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierDescriptionSpec {
    pub key: String,
    pub ui_name: String,
    pub selectors: Vec<String>,
    #[serde(default)]
    pub specifier: Option<String>,
    pub operation: String,
    #[serde(default = "default_modifier_type")]
    pub modifier_type: String,
}

fn default_modifier_type() -> String {
    ModifierType::Indeterminate.to_string()
}

impl ModifierDescriptionSpec {
    pub fn into_description(self) -> LoadResult<ModifierDescription> {
        let operation = Operation::parse(&self.operation)?;
        let modifier_type = ModifierType::parse(&self.modifier_type)?;
        Ok(ModifierDescription::builder(self.key, self.ui_name)
            .selectors(Selectors::tags(&self.selectors))
            .specifier(Specifier::parse(self.specifier.as_deref()))
            .operation(operation)
            .modifier_type(modifier_type)
            .build())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeNodeSpec {
    pub start: f64,
    pub interpolation: String,
    pub damage: f64,
    #[serde(default)]
    pub exponent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostHeatSpec {
    #[serde(default)]
    pub group: u32,
    pub max_free_alpha: u32,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JamSpec {
    pub probability: f64,
    pub duration: f64,
    pub extra_shots: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WeaponKindSpec {
    Energy {
        burn_time: f64,
    },
    Ballistic {
        ammo_type: String,
        #[serde(default = "one")]
        ammo_per_shot: u32,
        #[serde(default)]
        jam: Option<JamSpec>,
    },
    Missile {
        ammo_type: String,
        #[serde(default = "one")]
        ammo_per_shot: u32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub id: u32,
    pub name: String,
    pub mass: f64,
    pub slots: u32,
    /// Tags shared by every attribute of the weapon.
    pub selectors: Vec<String>,
    pub heat: f64,
    pub cooldown: f64,
    pub damage: f64,
    #[serde(default = "one")]
    pub projectiles_per_round: u32,
    #[serde(default = "one")]
    pub rounds_per_shot: u32,
    #[serde(default)]
    pub volley_delay: f64,
    #[serde(default)]
    pub projectile_speed: f64,
    /// Spread in degrees; absent for perfectly accurate weapons.
    #[serde(default)]
    pub spread: Option<f64>,
    pub ranges: Vec<RangeNodeSpec>,
    /// Absent for weapons exempt from ghost heat.
    #[serde(default)]
    pub ghost_heat: Option<GhostHeatSpec>,
    pub kind: WeaponKindSpec,
}

fn one() -> u32 {
    1
}

impl WeaponSpec {
    pub fn into_weapon(self) -> LoadResult<Weapon> {
        let selectors = self.selectors;
        let attr = |base: f64, specifier: &str| {
            Attribute::new(base, selectors.iter(), Some(specifier))
        };

        let nodes = self
            .ranges
            .into_iter()
            .map(|node| -> LoadResult<RangeNode> {
                let kind = InterpolationType::parse(&node.interpolation)?;
                let start = attr(node.start, names::SPEC_WEAPON_RANGE);
                Ok(RangeNode::new(start, kind, node.damage, node.exponent)?)
            })
            .collect::<LoadResult<Vec<_>>>()?;
        let spread = self.spread.map(|s| attr(s, names::SPEC_WEAPON_SPREAD));
        let range = WeaponRangeProfile::new(nodes, spread)?;

        let ghost_heat = match self.ghost_heat {
            Some(rule) => GhostHeatRule::new(rule.group, rule.max_free_alpha, rule.multiplier),
            None => GhostHeatRule::exempt(),
        };

        let kind = match self.kind {
            WeaponKindSpec::Energy { burn_time } => WeaponKind::Energy {
                burn_time: attr(burn_time, names::SPEC_WEAPON_DURATION),
            },
            WeaponKindSpec::Ballistic {
                ammo_type,
                ammo_per_shot,
                jam,
            } => WeaponKind::Ballistic {
                ammo: AmmoRequirement::new(ammo_type, ammo_per_shot),
                jam: jam.map(|jam| {
                    JamProfile::new(
                        attr(jam.probability, names::SPEC_WEAPON_JAM_PROBABILITY),
                        attr(jam.duration, names::SPEC_WEAPON_JAM_DURATION),
                        jam.extra_shots,
                    )
                }),
            },
            WeaponKindSpec::Missile {
                ammo_type,
                ammo_per_shot,
            } => WeaponKind::Missile {
                ammo: AmmoRequirement::new(ammo_type, ammo_per_shot),
            },
        };

        Ok(Weapon {
            info: ItemInfo::new(ItemId(self.id), self.name, self.mass, self.slots),
            heat: attr(self.heat, names::SPEC_WEAPON_HEAT),
            cooldown: attr(self.cooldown, names::SPEC_WEAPON_COOLDOWN),
            damage_per_projectile: self.damage,
            projectiles_per_round: self.projectiles_per_round,
            rounds_per_shot: self.rounds_per_shot,
            volley_delay: self.volley_delay,
            projectile_speed: attr(self.projectile_speed, names::SPEC_WEAPON_PROJECTILE_SPEED),
            range,
            ghost_heat,
            kind,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatSinkSpec {
    pub id: u32,
    pub name: String,
    pub mass: f64,
    pub slots: u32,
    pub dissipation: f64,
    pub capacity: f64,
}

impl HeatSinkSpec {
    pub fn into_heat_sink(self) -> HeatSink {
        HeatSink {
            info: ItemInfo::new(ItemId(self.id), self.name, self.mass, self.slots),
            dissipation: Attribute::new(self.dissipation, [names::SEL_HEAT_DISSIPATION], None),
            capacity: Attribute::new(self.capacity, [names::SEL_HEAT_LIMIT], None),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSpec {
    pub id: u32,
    pub name: String,
    pub mass: f64,
    pub slots: u32,
    pub rating: u32,
    #[serde(default = "default_internal_heat_sinks")]
    pub internal_heat_sinks: u32,
}

fn default_internal_heat_sinks() -> u32 {
    10
}

impl EngineSpec {
    pub fn into_engine(self) -> Engine {
        Engine {
            info: ItemInfo::new(ItemId(self.id), self.name, self.mass, self.slots),
            rating: self.rating,
            internal_heat_sinks: self.internal_heat_sinks,
        }
    }
}

impl CatalogSpec {
    /// Validates every record and assembles the repository.
    pub fn into_repository(self) -> LoadResult<Repository> {
        let mut builder = Repository::builder();

        for spec in self.modifier_descriptions {
            let key = spec.key.clone();
            let description = spec
                .into_description()
                .with_context(|| format!("Invalid modifier description '{key}'"))?;
            builder = builder.modifier_description(description)?;
        }

        for spec in self.weapons {
            let label = format!("{} (id {})", spec.name, spec.id);
            let weapon = spec
                .into_weapon()
                .with_context(|| format!("Invalid weapon {label}"))?;
            builder = builder.weapon(weapon)?;
        }

        for spec in self.heat_sinks {
            builder = builder.heat_sink(spec.into_heat_sink())?;
        }

        for spec in self.engines {
            builder = builder.engine(spec.into_engine())?;
        }

        Ok(builder.build())
    }
}

/// Loader for the equipment catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a RON file and build a repository from it.
    pub fn load(path: &Path) -> LoadResult<Repository> {
        let content = read_file(path)?;
        let repository = Self::parse(&content)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            items = repository.len(),
            "loaded equipment catalog"
        );
        Ok(repository)
    }

    /// Parse catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Repository> {
        let spec: CatalogSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        spec.into_repository()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechlab_core::{EngineError, ErrorSeverity, ModelError, Modifier};

    const LASER: &str = r#"(
        weapons: [
            (
                id: 1001,
                name: "Medium Laser",
                mass: 1.0,
                slots: 1,
                selectors: ["energy", "laser"],
                heat: 4.0,
                cooldown: 4.0,
                damage: 5.0,
                ranges: [
                    (start: 0.0, interpolation: "linear", damage: 1.0),
                    (start: 270.0, interpolation: "linear", damage: 1.0),
                    (start: 540.0, interpolation: "step", damage: 0.0),
                ],
                ghost_heat: Some((max_free_alpha: 2, multiplier: 1.0)),
                kind: Energy(burn_time: 1.0),
            ),
        ],
    )"#;

    #[test]
    fn parses_weapon_with_defaults() {
        let repo = CatalogLoader::parse(LASER).unwrap();
        let laser = repo.weapon(ItemId(1001)).unwrap();

        assert_eq!(laser.rounds_per_shot, 1);
        assert_eq!(laser.ghost_heat.group, GhostHeatRule::UNGROUPED);
        assert_eq!(laser.seconds_per_shot(Modifier::NONE), 5.0);
        assert_eq!(laser.range_max(Modifier::NONE), 540.0);
        assert_eq!(laser.heat.specifier(), Some(names::SPEC_WEAPON_HEAT));
    }

    #[test]
    fn unknown_interpolation_names_the_weapon() {
        let bad = LASER.replace("\"step\"", "\"cubic\"");
        let err = CatalogLoader::parse(&bad).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Medium Laser"), "{message}");
        let model = err.downcast_ref::<ModelError>().unwrap();
        assert_eq!(model.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn exponent_on_linear_node_is_rejected() {
        let bad = LASER.replace(
            r#"(start: 270.0, interpolation: "linear", damage: 1.0)"#,
            r#"(start: 270.0, interpolation: "linear", damage: 1.0, exponent: Some(2.0))"#,
        );
        assert!(CatalogLoader::parse(&bad).is_err());
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let text = r#"(
            modifier_descriptions: [
                (key: "odd", ui_name: "Odd", selectors: ["all"], operation: "pow"),
            ],
        )"#;
        let err = CatalogLoader::parse(text).unwrap_err();
        assert!(format!("{err:#}").contains("odd"));
    }
}
