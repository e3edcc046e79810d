//! Persistent checklist: add entries, check them off, clear the list.
//!
//! The [`Checklist`] controller owns a [`TodoList`] and mirrors it to a
//! [`Store`] and a [`View`] after every user action. Hosts provide the store,
//! the view and a one-shot timer; see [`platform`] for the headless ones.

pub mod config;
pub mod controller;
pub mod error;
pub mod item;
pub mod list;
pub mod persistence;
pub mod platform;
pub mod view;

pub use config::Config;
pub use controller::{Checklist, ClearOutcome, DeferredRender, RenderTicket, SubmitOutcome};
pub use error::{ConfigError, StoreError};
pub use item::{Item, ItemId};
pub use list::TodoList;
pub use persistence::Store;
pub use view::{RowModel, View};
