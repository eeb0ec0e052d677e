/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Distance between range samples for percentile-range queries.
    pub sample_step: f64,
    /// Fraction of peak effectiveness that defines the "effective" range span.
    pub percentile: f64,
    /// Range at which reports evaluate damage when none is given.
    pub default_range: f64,
}

impl EngineConfig {
    // ===== fixed model constants =====
    /// Radius of the assumed target, in distance units, for spread accuracy.
    pub const TARGET_RADIUS: f64 = 6.0;
    /// Sampling step of [`crate::WeaponRangeProfile::percentile_range`].
    pub const RANGE_SAMPLE_STEP: f64 = 10.0;
    /// Top speed per engine rating point per ton of chassis.
    pub const SPEED_FACTOR: f64 = 16.2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PERCENTILE: f64 = 0.9;
    pub const DEFAULT_RANGE: f64 = 0.0;

    pub fn new() -> Self {
        Self {
            sample_step: Self::RANGE_SAMPLE_STEP,
            percentile: Self::DEFAULT_PERCENTILE,
            default_range: Self::DEFAULT_RANGE,
        }
    }

    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    pub fn with_default_range(mut self, range: f64) -> Self {
        self.default_range = range;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
