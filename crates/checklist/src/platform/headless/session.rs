//! A checklist session driven by virtual time.

use crate::config::Config;
use crate::controller::{Checklist, ClearOutcome, SubmitOutcome};
use crate::item::ItemId;
use crate::list::TodoList;
use crate::persistence::Store;

use super::clock::VirtualClock;
use super::storage::MemoryStorage;
use super::view::HeadlessView;

pub struct HeadlessSession<S = MemoryStorage> {
    checklist: Checklist<S, HeadlessView>,
    clock: VirtualClock,
}

impl<S: Store> HeadlessSession<S> {
    pub fn start(config: Config, store: S) -> Self {
        Self {
            checklist: Checklist::start(config, store, HeadlessView::new()),
            clock: VirtualClock::new(),
        }
    }

    /// Type `text` into the input and submit the form.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        self.checklist.view_mut().type_input(text);
        self.checklist.submit()
    }

    /// Click the checkbox of row `id`. Returns whether an item was removed.
    pub fn complete(&mut self, id: ItemId) -> bool {
        match self.checklist.complete(id) {
            Some(render) => {
                self.clock.schedule(render);
                true
            }
            None => false,
        }
    }

    /// Press "clear all" and answer the prompt with `confirm`.
    pub fn clear_all(&mut self, confirm: bool) -> ClearOutcome {
        self.checklist.view_mut().set_confirm_answer(confirm);
        self.checklist.clear_all()
    }

    /// Advance virtual time, delivering due deferred renders.
    ///
    /// Returns how many of them actually rendered.
    pub fn advance_by(&mut self, ms: u64) -> usize {
        self.clock
            .advance_by(ms)
            .into_iter()
            .filter(|ticket| self.checklist.run_deferred_render(*ticket))
            .count()
    }

    /// Advance until no timer is pending.
    pub fn run_until_idle(&mut self) -> usize {
        let mut rendered = 0;
        while let Some(ms) = self.clock.time_to_next_timer() {
            rendered += self.advance_by(ms);
        }
        rendered
    }

    /// Re-render immediately, as an overlapping timer would.
    pub fn render(&mut self) {
        self.checklist.render();
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn list(&self) -> &TodoList {
        self.checklist.list()
    }

    pub fn view(&self) -> &HeadlessView {
        self.checklist.view()
    }

    pub fn store(&self) -> &S {
        self.checklist.store()
    }
}
