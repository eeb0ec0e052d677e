//! Well-known selector tags and specifier names used by equipment data.
//!
//! Static data may use any tag it likes; these are the ones the engine itself
//! attaches when it synthesizes attributes (engine speed, heat sinks) and the
//! defaults the content loaders fill in.

// Specifiers for weapon attributes
pub const SPEC_WEAPON_HEAT: &str = "heat";
pub const SPEC_WEAPON_COOLDOWN: &str = "cooldown";
pub const SPEC_WEAPON_DURATION: &str = "duration";
pub const SPEC_WEAPON_RANGE: &str = "range";
pub const SPEC_WEAPON_SPREAD: &str = "spread";
pub const SPEC_WEAPON_PROJECTILE_SPEED: &str = "velocity";
pub const SPEC_WEAPON_JAM_PROBABILITY: &str = "jamchance";
pub const SPEC_WEAPON_JAM_DURATION: &str = "jamtime";

// Selectors for chassis-wide attributes
pub const SEL_HEAT_DISSIPATION: &str = "heatdissipation";
pub const SEL_HEAT_LIMIT: &str = "heatlimit";
pub const SEL_MOVEMENT_MAX_SPEED: &str = "speed";
