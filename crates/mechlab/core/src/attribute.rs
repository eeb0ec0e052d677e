//! Attributes - numeric quantities that modifiers can act upon.
//!
//! Every modifiable number in the equipment model (heat, cooldown, range
//! breakpoints, spread, heat sink dissipation...) is an [`Attribute`]. An
//! attribute carries a base value from static data, a set of selector tags that
//! identify what kind of quantity it is, and an optional specifier naming the
//! exact quantity.
//!
//! ```text
//! value = (base + Σ ADD) × (1 + Σ MUL)
//! ```
//!
//! Multiplicative modifiers are summed before being applied, so two +10%
//! modifiers yield ×1.20 and not ×1.21.

use std::collections::BTreeSet;
use std::fmt;

use crate::modifier::{Modifier, Operation};

/// Canonical form of a selector or specifier: trimmed and lowercased.
///
/// Returns `None` when nothing is left after trimming.
pub fn canonical(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Canonicalizes a collection of tags into a set, dropping empty entries.
pub fn canonical_set<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| canonical(tag.as_ref()))
        .collect()
}

/// A named, taggable numeric quantity.
///
/// Attributes are immutable value objects. Re-basing an attribute (e.g. after
/// equipment data has been reloaded) produces a new one through
/// [`Attribute::with_base_value`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    base_value: f64,
    selectors: BTreeSet<String>,
    specifier: Option<String>,
}

impl Attribute {
    /// Creates an attribute, canonicalizing selectors and specifier.
    pub fn new<I, S>(base_value: f64, selectors: I, specifier: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            base_value,
            selectors: canonical_set(selectors),
            specifier: specifier.and_then(canonical),
        }
    }

    /// Attribute that no modifier with a selector set can reach.
    ///
    /// Only descriptions using the universal selector together with the
    /// wildcard or absent specifier affect it.
    pub fn fixed(base_value: f64) -> Self {
        Self {
            base_value,
            selectors: BTreeSet::new(),
            specifier: None,
        }
    }

    /// Returns a copy of this attribute with a different base value.
    #[must_use]
    pub fn with_base_value(&self, base_value: f64) -> Self {
        Self {
            base_value,
            ..self.clone()
        }
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn selectors(&self) -> &BTreeSet<String> {
        &self.selectors
    }

    pub fn specifier(&self) -> Option<&str> {
        self.specifier.as_deref()
    }

    /// Resolves the value of this attribute under the given modifiers.
    ///
    /// Modifiers whose description does not affect this attribute are ignored.
    ///
    /// # Formula
    /// ```text
    /// result = (base + Σ additive) × (1 + Σ multiplicative)
    /// ```
    pub fn value<'a, I>(&self, modifiers: I) -> f64
    where
        I: IntoIterator<Item = &'a Modifier>,
    {
        let mut additive = 0.0;
        let mut multiplicative = 0.0;

        for modifier in modifiers {
            let description = modifier.description();
            if !description.affects(self) {
                continue;
            }
            match description.operation() {
                Operation::Add => additive += modifier.value(),
                Operation::Mul => multiplicative += modifier.value(),
            }
        }

        (self.base_value + additive) * (1.0 + multiplicative)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.base_value)?;
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(selector)?;
        }
        f.write_str("]")?;
        if let Some(specifier) = &self.specifier {
            write!(f, " .{specifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::modifier::{ModifierDescription, Selectors, Specifier};

    fn modifier(operation: Operation, value: f64) -> Modifier {
        let description = ModifierDescription::builder("test", "Test")
            .selectors(Selectors::tags(["energy"]))
            .specifier(Specifier::named("heat"))
            .operation(operation)
            .build();
        Modifier::new(Arc::new(description), value)
    }

    fn heat() -> Attribute {
        Attribute::new(100.0, ["Energy", " laser "], Some("HEAT"))
    }

    #[test]
    fn canonicalization_trims_and_lowercases() {
        let attr = Attribute::new(1.0, ["  Energy ", "", "LASER"], Some("  "));
        assert_eq!(
            attr.selectors().iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["energy", "laser"]
        );
        assert_eq!(attr.specifier(), None);
    }

    #[test]
    fn no_modifiers_returns_base_value() {
        assert_eq!(heat().value(Modifier::NONE), 100.0);
    }

    #[test]
    fn additive_then_multiplicative() {
        let add = modifier(Operation::Add, 10.0);
        let mul = modifier(Operation::Mul, 0.5);

        assert_eq!(heat().value([&add]), 110.0);
        assert_eq!(heat().value([&mul]), 150.0);
        assert_eq!(heat().value([&add, &mul]), 165.0);
        // Order of modifiers does not matter
        assert_eq!(heat().value([&mul, &add]), 165.0);
    }

    #[test]
    fn multiplicative_modifiers_are_summed_not_compounded() {
        let first = modifier(Operation::Mul, 0.10);
        let second = modifier(Operation::Mul, 0.10);

        let value = heat().value([&first, &second]);
        assert!((value - 120.0).abs() < 1e-9, "got {value}");
        assert!((value - 121.0).abs() > 0.5);
    }

    #[test]
    fn unrelated_modifiers_are_ignored() {
        let other = Modifier::new(
            Arc::new(
                ModifierDescription::builder("ballistic_heat", "Ballistic Heat")
                    .selectors(Selectors::tags(["ballistic"]))
                    .specifier(Specifier::named("heat"))
                    .operation(Operation::Add)
                    .build(),
            ),
            50.0,
        );
        assert_eq!(heat().value([&other]), 100.0);
    }

    #[test]
    fn rebasing_produces_new_attribute() {
        let original = heat();
        let rebased = original.with_base_value(42.0);
        assert_eq!(original.base_value(), 100.0);
        assert_eq!(rebased.base_value(), 42.0);
        assert_eq!(rebased.selectors(), original.selectors());
        assert_eq!(rebased.specifier(), Some("heat"));
    }

    #[test]
    fn display_lists_selectors_and_specifier() {
        assert_eq!(heat().to_string(), "100 [energy, laser] .heat");
    }
}
