//! Identity and common physical data shared by every equipment item.

use std::fmt;

/// Numeric identifier of an equipment item type.
///
/// Items of the same type share an id; ids are unique across weapons, heat
/// sinks and engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fields every item carries regardless of its kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInfo {
    pub id: ItemId,
    pub name: String,
    /// Mass in tons.
    pub mass: f64,
    /// Critical slots occupied.
    pub slots: u32,
}

impl ItemInfo {
    pub fn new(id: ItemId, name: impl Into<String>, mass: f64, slots: u32) -> Self {
        Self {
            id,
            name: name.into(),
            mass,
            slots,
        }
    }
}
