//! Ordered in-memory collection of items.
//!
//! Insertion order is display order. Id uniqueness is the controller's
//! responsibility; the list itself never rejects an item.

use crate::item::{Item, ItemId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the list.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with the given id.
    ///
    /// Returns `None` and leaves the list untouched when no item matches.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current contents in display order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Highest id currently present, not necessarily the last one.
    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(Item::id).max()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for TodoList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
