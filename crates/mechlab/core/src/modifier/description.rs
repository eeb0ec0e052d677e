//! Modifier descriptions and the selector/specifier matching rules.

use std::collections::BTreeSet;

use super::{ModifierType, Operation};
use crate::attribute::{Attribute, canonical, canonical_set};

/// Tag that stands for "every attribute" as a selector and
/// "any specifier" as a specifier.
pub const WILDCARD: &str = "all";

/// Which attributes a description targets, by selector tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selectors {
    /// Matches every attribute regardless of its tags.
    All,
    /// Matches attributes sharing at least one tag.
    Tags(BTreeSet<String>),
}

impl Selectors {
    /// Builds a canonical tag set. A set consisting solely of `"all"` is the
    /// universal selector.
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = canonical_set(tags);
        if set.len() == 1 && set.contains(WILDCARD) {
            Self::All
        } else {
            Self::Tags(set)
        }
    }

    fn overlaps(&self, attribute: &BTreeSet<String>) -> bool {
        match self {
            Self::All => true,
            Self::Tags(tags) => !tags.is_disjoint(attribute),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::Tags(BTreeSet::new())
    }
}

/// Narrowing of a description to one named quantity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Specifier {
    /// Only attributes without a specifier match.
    #[default]
    Absent,
    /// Any attribute specifier matches, including none.
    All,
    /// The attribute specifier must be exactly this name.
    Named(String),
}

impl Specifier {
    /// Parses optional specifier text: empty is absent, `"all"` is the wildcard.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.and_then(canonical) {
            None => Self::Absent,
            Some(name) if name == WILDCARD => Self::All,
            Some(name) => Self::Named(name),
        }
    }

    /// Shorthand for [`Specifier::parse`] with a present value.
    pub fn named(name: &str) -> Self {
        Self::parse(Some(name))
    }

    fn accepts(&self, attribute: Option<&str>) -> bool {
        match (self, attribute) {
            (Self::All, _) => true,
            (Self::Absent, None) => true,
            (Self::Absent, Some(_)) => false,
            (Self::Named(name), Some(other)) => name == other,
            (Self::Named(_), None) => false,
        }
    }
}

/// Immutable rule describing which attributes a modifier affects and how.
///
/// One description is shared by every [`super::Modifier`] built from it and
/// may match many attributes across many items.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifierDescription {
    key: String,
    ui_name: String,
    selectors: Selectors,
    specifier: Specifier,
    operation: Operation,
    modifier_type: ModifierType,
}

impl ModifierDescription {
    /// Starts a builder. `key` identifies the description in data files.
    pub fn builder(key: impl Into<String>, ui_name: impl Into<String>) -> ModifierDescriptionBuilder {
        ModifierDescriptionBuilder {
            description: Self {
                key: key.into(),
                ui_name: ui_name.into(),
                selectors: Selectors::default(),
                specifier: Specifier::default(),
                operation: Operation::default(),
                modifier_type: ModifierType::default(),
            },
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ui_name(&self) -> &str {
        &self.ui_name
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn specifier(&self) -> &Specifier {
        &self.specifier
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn modifier_type(&self) -> ModifierType {
        self.modifier_type
    }

    /// Returns true if modifiers of this description apply to `attribute`.
    ///
    /// Both must hold:
    /// 1. the specifiers are compatible (absent/absent, wildcard, or equal)
    /// 2. the selectors are universal or share at least one tag
    pub fn affects(&self, attribute: &Attribute) -> bool {
        self.specifier.accepts(attribute.specifier())
            && self.selectors.overlaps(attribute.selectors())
    }
}

/// Builder for [`ModifierDescription`].
#[derive(Clone, Debug)]
pub struct ModifierDescriptionBuilder {
    description: ModifierDescription,
}

impl ModifierDescriptionBuilder {
    pub fn selectors(mut self, selectors: Selectors) -> Self {
        self.description.selectors = selectors;
        self
    }

    pub fn specifier(mut self, specifier: Specifier) -> Self {
        self.description.specifier = specifier;
        self
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.description.operation = operation;
        self
    }

    pub fn modifier_type(mut self, modifier_type: ModifierType) -> Self {
        self.description.modifier_type = modifier_type;
        self
    }

    pub fn build(self) -> ModifierDescription {
        self.description
    }
}
