//! Ghost heat: the surcharge for firing too many similar weapons at once.
//!
//! Ungrouped weapons are counted per weapon type; grouped weapons are counted
//! per ghost-heat group across types. For every weapon beyond the free alpha
//! of its partition the penalty grows along [`HEAT_SCALE`]:
//!
//! ```text
//! while count > max_free_alpha:
//!     penalty += HEAT_SCALE[min(count, 12)] × multiplier × heat
//!     count -= 1
//! ```

use std::collections::BTreeMap;

use crate::item::ItemId;

/// Penalty scale indexed by the number of weapons fired together.
pub const HEAT_SCALE: [f64; 13] = [
    0.0, 0.0, 0.08, 0.18, 0.30, 0.45, 0.60, 0.80, 1.10, 1.50, 2.00, 3.00, 5.00,
];

/// Static ghost-heat parameters of a weapon type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostHeatRule {
    /// Cross-type group; [`GhostHeatRule::UNGROUPED`] counts per weapon type.
    pub group: u32,
    /// Number of weapons that may fire together without penalty.
    pub max_free_alpha: u32,
    pub multiplier: f64,
}

impl GhostHeatRule {
    pub const UNGROUPED: u32 = 0;

    pub fn new(group: u32, max_free_alpha: u32, multiplier: f64) -> Self {
        Self {
            group,
            max_free_alpha,
            multiplier,
        }
    }

    /// Rule for weapons that never incur ghost heat.
    pub fn exempt() -> Self {
        Self::new(Self::UNGROUPED, u32::MAX, 0.0)
    }

    pub fn is_grouped(&self) -> bool {
        self.group != Self::UNGROUPED
    }
}

/// One weapon taking part in an alpha strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiredWeapon {
    pub weapon: ItemId,
    pub rule: GhostHeatRule,
    /// Heat from static data; picks the representative of a group.
    pub base_heat: f64,
    /// Heat under the active modifiers; used in the penalty.
    pub heat: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Partition {
    Type(ItemId),
    Group(u32),
}

struct Bucket {
    count: u32,
    representative: FiredWeapon,
}

/// Total ghost heat generated by firing `fired` simultaneously.
///
/// This is heat on top of each weapon's own listed heat. Within a group the
/// rule and heat of the member with the highest base heat apply; the first
/// such member wins a tie.
pub fn calculate<I>(fired: I) -> f64
where
    I: IntoIterator<Item = FiredWeapon>,
{
    let mut buckets: BTreeMap<Partition, Bucket> = BTreeMap::new();

    for weapon in fired {
        let key = if weapon.rule.is_grouped() {
            Partition::Group(weapon.rule.group)
        } else {
            Partition::Type(weapon.weapon)
        };
        buckets
            .entry(key)
            .and_modify(|bucket| {
                bucket.count += 1;
                if weapon.base_heat > bucket.representative.base_heat {
                    bucket.representative = weapon;
                }
            })
            .or_insert(Bucket {
                count: 1,
                representative: weapon,
            });
    }

    buckets
        .values()
        .map(|bucket| penalty(bucket.count, &bucket.representative))
        .sum()
}

fn penalty(mut count: u32, representative: &FiredWeapon) -> f64 {
    let last = HEAT_SCALE.len() - 1;
    let mut total = 0.0;
    while count > representative.rule.max_free_alpha {
        let scale = HEAT_SCALE[(count as usize).min(last)];
        total += scale * representative.rule.multiplier * representative.heat;
        count -= 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(id: u32, rule: GhostHeatRule, heat: f64) -> FiredWeapon {
        FiredWeapon {
            weapon: ItemId(id),
            rule,
            base_heat: heat,
            heat,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn three_ungrouped_copies_over_free_alpha_of_two() {
        let rule = GhostHeatRule::new(0, 2, 1.0);
        let alpha = vec![fired(1, rule, 5.0); 3];
        assert!(close(calculate(alpha), 0.9));
    }

    #[test]
    fn within_free_alpha_is_free() {
        let rule = GhostHeatRule::new(0, 2, 1.0);
        assert_eq!(calculate(vec![fired(1, rule, 5.0); 2]), 0.0);
        assert_eq!(calculate(Vec::new()), 0.0);
    }

    #[test]
    fn ungrouped_types_are_counted_separately() {
        let rule = GhostHeatRule::new(0, 2, 1.0);
        let alpha = vec![
            fired(1, rule, 5.0),
            fired(1, rule, 5.0),
            fired(2, rule, 5.0),
            fired(2, rule, 5.0),
        ];
        assert_eq!(calculate(alpha), 0.0);
    }

    #[test]
    fn penalty_accumulates_down_the_scale() {
        let rule = GhostHeatRule::new(0, 2, 2.0);
        // Counts 4 and 3 are over the free alpha
        let expected = (HEAT_SCALE[4] + HEAT_SCALE[3]) * 2.0 * 3.0;
        assert!(close(calculate(vec![fired(7, rule, 3.0); 4]), expected));
    }

    #[test]
    fn large_alphas_clamp_to_last_scale_entry() {
        let rule = GhostHeatRule::new(0, 12, 1.0);
        let alpha = vec![fired(9, rule, 1.0); 15];
        // counts 15, 14, 13 all read the last entry
        assert!(close(calculate(alpha), 3.0 * HEAT_SCALE[12]));
    }

    #[test]
    fn group_uses_hottest_member() {
        let small = GhostHeatRule::new(3, 1, 1.0);
        let large = GhostHeatRule::new(3, 2, 4.0);
        let alpha = vec![
            fired(10, small, 2.0),
            fired(11, large, 7.0),
            fired(10, small, 2.0),
        ];
        // Group of three, rule and heat of the hottest member
        assert!(close(calculate(alpha), HEAT_SCALE[3] * 4.0 * 7.0));
    }

    #[test]
    fn group_tie_keeps_first_member() {
        let first = GhostHeatRule::new(5, 1, 1.0);
        let second = GhostHeatRule::new(5, 1, 10.0);
        let alpha = vec![fired(20, first, 4.0), fired(21, second, 4.0)];
        assert!(close(calculate(alpha), HEAT_SCALE[2] * 1.0 * 4.0));
    }

    #[test]
    fn modified_heat_drives_penalty() {
        let rule = GhostHeatRule::new(0, 2, 1.0);
        let weapon = FiredWeapon {
            weapon: ItemId(1),
            rule,
            base_heat: 5.0,
            heat: 4.0,
        };
        assert!(close(calculate(vec![weapon; 3]), 0.18 * 4.0));
    }

    #[test]
    fn exempt_weapons_never_penalize() {
        assert_eq!(
            calculate(vec![fired(1, GhostHeatRule::exempt(), 3.0); 20]),
            0.0
        );
    }
}
