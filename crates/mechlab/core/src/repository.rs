//! Immutable catalog of equipment items and modifier descriptions.
//!
//! A [`Repository`] is assembled once through [`RepositoryBuilder`] and then
//! shared by reference or `Arc`. Items are found by id or by name; names are
//! matched in canonical form (trimmed, lowercased).

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::attribute::canonical;
use crate::equipment::{Engine, HeatSink};
use crate::error::{EngineError, ErrorSeverity};
use crate::item::ItemId;
use crate::modifier::{Modifier, ModifierDescription};
use crate::weapon::Weapon;

/// Errors raised while assembling or querying a [`Repository`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("item id {0} registered twice")]
    DuplicateItem(ItemId),

    #[error("item name '{0}' registered twice")]
    DuplicateName(String),

    #[error("modifier '{0}' registered twice")]
    DuplicateModifier(String),

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
}

impl EngineError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateItem(_) | Self::DuplicateName(_) | Self::DuplicateModifier(_) => {
                ErrorSeverity::Internal
            }
            Self::UnknownModifier(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateItem(_) => "REPOSITORY_DUPLICATE_ITEM",
            Self::DuplicateName(_) => "REPOSITORY_DUPLICATE_NAME",
            Self::DuplicateModifier(_) => "REPOSITORY_DUPLICATE_MODIFIER",
            Self::UnknownModifier(_) => "REPOSITORY_UNKNOWN_MODIFIER",
        }
    }
}

/// A reference to any catalog item.
#[derive(Clone, Debug)]
pub enum ItemRef {
    Weapon(Arc<Weapon>),
    HeatSink(Arc<HeatSink>),
    Engine(Arc<Engine>),
}

impl ItemRef {
    pub fn id(&self) -> ItemId {
        match self {
            Self::Weapon(w) => w.id(),
            Self::HeatSink(h) => h.id(),
            Self::Engine(e) => e.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Weapon(w) => w.name(),
            Self::HeatSink(h) => h.name(),
            Self::Engine(e) => e.name(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Repository {
    items: BTreeMap<ItemId, ItemRef>,
    names: HashMap<String, ItemId>,
    modifiers: BTreeMap<String, Arc<ModifierDescription>>,
}

impl Repository {
    pub fn builder() -> RepositoryBuilder {
        RepositoryBuilder::default()
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemRef> {
        self.items.get(&id)
    }

    /// Looks an item up by name, ignoring case and surrounding whitespace.
    pub fn item_by_name(&self, name: &str) -> Option<&ItemRef> {
        let id = self.names.get(&canonical(name)?)?;
        self.items.get(id)
    }

    pub fn weapon(&self, id: ItemId) -> Option<&Arc<Weapon>> {
        match self.items.get(&id)? {
            ItemRef::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn weapon_by_name(&self, name: &str) -> Option<&Arc<Weapon>> {
        match self.item_by_name(name)? {
            ItemRef::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn heat_sink(&self, id: ItemId) -> Option<&Arc<HeatSink>> {
        match self.items.get(&id)? {
            ItemRef::HeatSink(h) => Some(h),
            _ => None,
        }
    }

    pub fn heat_sink_by_name(&self, name: &str) -> Option<&Arc<HeatSink>> {
        match self.item_by_name(name)? {
            ItemRef::HeatSink(h) => Some(h),
            _ => None,
        }
    }

    pub fn engine(&self, id: ItemId) -> Option<&Arc<Engine>> {
        match self.items.get(&id)? {
            ItemRef::Engine(e) => Some(e),
            _ => None,
        }
    }

    pub fn engine_by_name(&self, name: &str) -> Option<&Arc<Engine>> {
        match self.item_by_name(name)? {
            ItemRef::Engine(e) => Some(e),
            _ => None,
        }
    }

    /// Weapons in id order.
    pub fn weapons(&self) -> impl Iterator<Item = &Arc<Weapon>> + '_ {
        self.items.values().filter_map(|item| match item {
            ItemRef::Weapon(w) => Some(w),
            _ => None,
        })
    }

    pub fn heat_sinks(&self) -> impl Iterator<Item = &Arc<HeatSink>> + '_ {
        self.items.values().filter_map(|item| match item {
            ItemRef::HeatSink(h) => Some(h),
            _ => None,
        })
    }

    pub fn engines(&self) -> impl Iterator<Item = &Arc<Engine>> + '_ {
        self.items.values().filter_map(|item| match item {
            ItemRef::Engine(e) => Some(e),
            _ => None,
        })
    }

    pub fn modifier_description(&self, key: &str) -> Option<&Arc<ModifierDescription>> {
        self.modifiers.get(&canonical(key)?)
    }

    pub fn modifier_descriptions(&self) -> impl Iterator<Item = &Arc<ModifierDescription>> + '_ {
        self.modifiers.values()
    }

    /// Instantiates the description registered under `key` with `value`.
    pub fn modifier(&self, key: &str, value: f64) -> Result<Modifier, RepositoryError> {
        self.modifier_description(key)
            .map(|description| Modifier::new(Arc::clone(description), value))
            .ok_or_else(|| RepositoryError::UnknownModifier(key.to_string()))
    }

    /// Instantiates a list of `(key, value)` pairs, stopping at the first
    /// unknown key.
    pub fn modifiers<'a, I>(&self, entries: I) -> Result<Vec<Modifier>, RepositoryError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        entries
            .into_iter()
            .map(|(key, value)| self.modifier(key, value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collects items and modifier descriptions, rejecting duplicates.
#[derive(Debug, Default)]
pub struct RepositoryBuilder {
    repository: Repository,
}

impl RepositoryBuilder {
    pub fn weapon(self, weapon: Weapon) -> Result<Self, RepositoryError> {
        self.insert(ItemRef::Weapon(Arc::new(weapon)))
    }

    pub fn heat_sink(self, heat_sink: HeatSink) -> Result<Self, RepositoryError> {
        self.insert(ItemRef::HeatSink(Arc::new(heat_sink)))
    }

    pub fn engine(self, engine: Engine) -> Result<Self, RepositoryError> {
        self.insert(ItemRef::Engine(Arc::new(engine)))
    }

    pub fn modifier_description(
        mut self,
        description: ModifierDescription,
    ) -> Result<Self, RepositoryError> {
        let raw = description.key().to_string();
        let key = canonical(&raw).unwrap_or_default();
        if self.repository.modifiers.contains_key(&key) {
            return Err(RepositoryError::DuplicateModifier(raw));
        }
        self.repository.modifiers.insert(key, Arc::new(description));
        Ok(self)
    }

    fn insert(mut self, item: ItemRef) -> Result<Self, RepositoryError> {
        let id = item.id();
        if self.repository.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateItem(id));
        }
        if let Some(name) = canonical(item.name()) {
            if self.repository.names.contains_key(&name) {
                return Err(RepositoryError::DuplicateName(item.name().to_string()));
            }
            self.repository.names.insert(name, id);
        }
        self.repository.items.insert(id, item);
        Ok(self)
    }

    pub fn build(self) -> Repository {
        tracing::debug!(
            items = self.repository.items.len(),
            modifiers = self.repository.modifiers.len(),
            "repository assembled"
        );
        self.repository
    }
}
