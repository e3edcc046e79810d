//! A view that records what would be shown.

use std::collections::VecDeque;

use crate::item::ItemId;
use crate::view::{RowModel, View};

#[derive(Debug, Default)]
pub struct HeadlessView {
    rows: Vec<RowModel>,
    input: String,
    status: String,
    input_focused: bool,
    render_passes: usize,
    /// Answers handed out to `confirm`, front first.
    confirm_answers: VecDeque<bool>,
    default_confirm_answer: bool,
    prompts: Vec<String>,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate typing into the input.
    pub fn type_input(&mut self, text: &str) {
        self.input = text.to_owned();
        self.input_focused = true;
    }

    /// Answer given to every prompt not covered by a queued answer.
    pub fn set_confirm_answer(&mut self, answer: bool) {
        self.default_confirm_answer = answer;
    }

    /// Answer the next prompt with `answer`.
    pub fn queue_confirm_answer(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    /// How many times the rows were cleared for a rebuild.
    pub fn render_passes(&self) -> usize {
        self.render_passes
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl View for HeadlessView {
    fn clear_rows(&mut self) {
        self.rows.clear();
        self.render_passes += 1;
    }

    fn append_row(&mut self, row: RowModel) {
        self.rows.push(row);
    }

    fn row_label(&self, id: ItemId) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.label.clone())
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_owned();
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_owned();
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_owned());
        self.confirm_answers
            .pop_front()
            .unwrap_or(self.default_confirm_answer)
    }
}
