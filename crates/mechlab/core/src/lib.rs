//! Attribute and modifier engine for mech loadouts.
//!
//! `mechlab-core` resolves modified equipment stats (heat, cooldown, range
//! breakpoints, dissipation...) from base values and the modifiers active on a
//! loadout, and derives weapon and loadout metrics from them. Everything here
//! is pure: data comes in through [`Repository`], results go out as numbers.
pub mod attribute;
pub mod config;
pub mod equipment;
pub mod error;
pub mod ghost_heat;
pub mod item;
pub mod loadout;
pub mod modifier;
pub mod range;
pub mod repository;
pub mod weapon;

pub use attribute::Attribute;
pub use config::EngineConfig;
pub use equipment::{Engine, HeatSink};
pub use error::{EngineError, ErrorSeverity, ModelError};
pub use ghost_heat::{FiredWeapon, GhostHeatRule};
pub use item::{ItemId, ItemInfo};
pub use loadout::{Loadout, LoadoutMetrics};
pub use modifier::{
    Modifier, ModifierDescription, ModifierDescriptionBuilder, ModifierType, Operation, Selectors,
    Specifier,
};
pub use range::{
    Interpolation, InterpolationType, RangeNode, RangeProfileError, RangeSpan, WeaponRangeProfile,
};
pub use repository::{ItemRef, Repository, RepositoryBuilder, RepositoryError};
pub use weapon::{
    AmmoRequirement, JamProfile, StatExpr, StatExprError, StatSource, StatTerm, Weapon, WeaponKind,
};
