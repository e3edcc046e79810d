//! A single checklist entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an item within one list.
///
/// Ids are positive and assigned by the controller in increasing order.
/// Stored records with id `0` fail to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ItemId(pub u64);

impl ItemId {
    pub const FIRST: Self = Self(1);

    /// `None` once the id space is used up.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl TryFrom<u64> for ItemId {
    type Error = String;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        if raw == 0 {
            return Err("item id must be positive".to_owned());
        }
        Ok(Self(raw))
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry of the list: an id plus its display text.
///
/// No validation happens here, the controller trims and rejects empty text
/// before constructing an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "_id")]
    id: ItemId,
    #[serde(alias = "_item")]
    text: String,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
