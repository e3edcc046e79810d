//! Checklist view backed by zoon signals.
//!
//! The controller writes into the mutables, the element tree in `main.rs`
//! observes them.

use checklist::{ItemId, RowModel, View};
use zoon::*;

#[derive(Clone)]
pub struct ZoonView {
    rows: MutableVec<RowModel>,
    input: Mutable<String>,
    status: Mutable<String>,
    focus_input: Mutable<bool>,
}

impl ZoonView {
    pub fn new() -> Self {
        Self {
            rows: MutableVec::new(),
            input: Mutable::new(String::new()),
            status: Mutable::new(String::new()),
            focus_input: Mutable::new(false),
        }
    }

    pub fn rows_signal_vec(&self) -> impl SignalVec<Item = RowModel> + use<> {
        self.rows.signal_vec_cloned()
    }

    pub fn input_signal(&self) -> impl Signal<Item = String> + use<> {
        self.input.signal_cloned()
    }

    /// Mirror the text typed by the user.
    pub fn on_input_change(&self, text: String) {
        self.input.set_neq(text);
    }

    pub fn status_signal(&self) -> impl Signal<Item = String> + use<> {
        self.status.signal_cloned()
    }

    pub fn focus_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.focus_input.signal()
    }
}

impl View for ZoonView {
    fn clear_rows(&mut self) {
        self.rows.lock_mut().clear();
    }

    fn append_row(&mut self, row: RowModel) {
        self.rows.lock_mut().push_cloned(row);
    }

    fn row_label(&self, id: ItemId) -> Option<String> {
        self.rows
            .lock_ref()
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.label.clone())
    }

    fn input_text(&self) -> String {
        self.input.get_cloned()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input.set(text.to_owned());
    }

    fn focus_input(&mut self) {
        // Re-emit `true` even when the input was focused before.
        self.focus_input.set(false);
        self.focus_input.set(true);
    }

    fn set_status(&mut self, text: &str) {
        self.status.set(text.to_owned());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
