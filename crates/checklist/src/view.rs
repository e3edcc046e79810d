//! The rendering surface consumed by the controller.

use crate::item::{Item, ItemId};

/// One rendered row: a checkbox identified by the item id and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowModel {
    pub id: ItemId,
    pub label: String,
}

impl From<&Item> for RowModel {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            label: item.text().to_owned(),
        }
    }
}

/// A document-like surface holding a row container, one text input and a
/// status line read by assistive technology.
pub trait View {
    /// Remove every row under the row container.
    fn clear_rows(&mut self);

    fn append_row(&mut self, row: RowModel);

    /// Label text of the row currently displayed for `id`.
    fn row_label(&self, id: ItemId) -> Option<String>;

    fn input_text(&self) -> String;

    fn set_input_text(&mut self, text: &str);

    fn focus_input(&mut self);

    fn set_status(&mut self, text: &str);

    /// Ask a yes/no question, `true` means the user agreed.
    fn confirm(&mut self, prompt: &str) -> bool;
}
