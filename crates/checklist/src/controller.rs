//! Session controller tying the list, the store and the view together.
//!
//! Every user action follows the same cycle: mutate the list, write it to the
//! store, then project it onto the view. The only exception is completing an
//! item, whose re-render is deferred so the checked box stays visible for a
//! moment. The host owns the timer: it receives a [`DeferredRender`], waits
//! `delay_ms` and hands the ticket back to [`Checklist::run_deferred_render`].
//! Only the most recent ticket renders, so removals inside one delay window
//! collapse into a single render.

use crate::config::Config;
use crate::item::{Item, ItemId};
use crate::list::TodoList;
use crate::persistence::{self, Store};
use crate::view::{RowModel, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderTicket(pub(crate) u64);

/// A render the host must run once after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredRender {
    pub ticket: RenderTicket,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ItemId),
    /// The input was empty after trimming.
    Ignored,
    /// Every id up to `u64::MAX` has been handed out.
    IdsExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Declined,
    AlreadyEmpty,
}

/// One checklist session.
pub struct Checklist<S, V> {
    config: Config,
    list: TodoList,
    store: S,
    view: V,
    /// `None` once the id space is used up.
    next_id: Option<ItemId>,
    last_ticket: u64,
    pending_render: Option<RenderTicket>,
}

impl<S: Store, V: View> Checklist<S, V> {
    /// Load the stored list and render it.
    pub fn start(config: Config, store: S, view: V) -> Self {
        let list = persistence::load_list(&store, &config.storage_key);
        let next_id = list.max_id().map_or(Some(ItemId::FIRST), ItemId::next);
        let mut checklist = Self {
            config,
            list,
            store,
            view,
            next_id,
            last_ticket: 0,
            pending_render: None,
        };
        checklist.render();
        checklist
    }

    /// Add the pending input text as a new item.
    pub fn submit(&mut self) -> SubmitOutcome {
        let input = self.view.input_text();
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let Some(id) = self.allocate_id() else {
            log::error!("No item id left to assign");
            return SubmitOutcome::IdsExhausted;
        };
        self.list.add(Item::new(id, text));
        log::info!("Added item {id}");
        self.persist();
        let status = self.config.added_message(text);
        self.view.set_status(&status);
        self.render();
        SubmitOutcome::Added(id)
    }

    /// Check off the row `id`, removing its item.
    ///
    /// Returns the render the host has to schedule, or `None` when no item
    /// with that id exists anymore.
    pub fn complete(&mut self, id: ItemId) -> Option<DeferredRender> {
        let label = self.view.row_label(id);
        let removed = self.list.remove(id)?;
        log::info!("Completed item {id}");
        self.persist();
        let ticket = self.issue_ticket();
        let text = label.unwrap_or_else(|| removed.text().to_owned());
        let status = self.config.removed_message(&text);
        self.view.set_status(&status);
        Some(DeferredRender {
            ticket,
            delay_ms: self.config.removal_render_delay_ms,
        })
    }

    /// Empty the list after the user confirms.
    pub fn clear_all(&mut self) -> ClearOutcome {
        if self.list.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }
        if !self.view.confirm(&self.config.clear_prompt) {
            return ClearOutcome::Declined;
        }
        let count = self.list.len();
        self.list.clear();
        log::info!("Cleared {count} item(s)");
        self.persist();
        self.render();
        ClearOutcome::Cleared
    }

    /// Run a render scheduled by [`Self::complete`].
    ///
    /// Returns `false` for tickets superseded by a later removal or an
    /// immediate render.
    pub fn run_deferred_render(&mut self, ticket: RenderTicket) -> bool {
        if self.pending_render != Some(ticket) {
            log::debug!("Skipping superseded render {ticket:?}");
            return false;
        }
        self.render();
        true
    }

    /// Rebuild every row from the list, clear the input and focus it.
    pub fn render(&mut self) {
        self.pending_render = None;
        self.view.clear_rows();
        for item in self.list.all() {
            self.view.append_row(RowModel::from(item));
        }
        self.view.set_input_text("");
        self.view.focus_input();
        log::debug!("Rendered {} row(s)", self.list.len());
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending_render.is_some()
    }

    fn allocate_id(&mut self) -> Option<ItemId> {
        let id = self.next_id?;
        self.next_id = id.next();
        Some(id)
    }

    fn issue_ticket(&mut self) -> RenderTicket {
        self.last_ticket += 1;
        let ticket = RenderTicket(self.last_ticket);
        self.pending_render = Some(ticket);
        ticket
    }

    fn persist(&mut self) {
        let key = &self.config.storage_key;
        if let Err(error) = persistence::save_list(&mut self.store, key, &self.list) {
            log::error!("Failed to store list under '{key}': {error}");
        }
    }
}
