//! Persistence of the list into a string key-value store.
//!
//! The stored value is a JSON array of `{ "id", "text" }` records in display
//! order. Anything that does not decode as such an array is treated like a
//! missing value.

use crate::error::StoreError;
use crate::item::Item;
use crate::list::TodoList;

/// Durable string key-value storage, e.g. browser `localStorage`.
pub trait Store {
    /// Previous value under `key`, or `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

pub fn encode_list(list: &TodoList) -> Result<String, serde_json::Error> {
    serde_json::to_string(list.all())
}

pub fn decode_list(json: &str) -> Result<TodoList, serde_json::Error> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    Ok(items.into_iter().collect())
}

/// Load the list stored under `key`.
///
/// Absent and malformed values both yield an empty list.
pub fn load_list(store: &impl Store, key: &str) -> TodoList {
    let Some(json) = store.read(key) else {
        log::debug!("No stored list under '{key}'");
        return TodoList::new();
    };
    match decode_list(&json) {
        Ok(list) => {
            log::debug!("Loaded {} item(s) from '{key}'", list.len());
            list
        }
        Err(error) => {
            log::warn!("Ignoring malformed list stored under '{key}': {error}");
            TodoList::new()
        }
    }
}

pub fn save_list(store: &mut impl Store, key: &str, list: &TodoList) -> Result<(), StoreError> {
    let json = encode_list(list)?;
    store.write(key, &json)
}
