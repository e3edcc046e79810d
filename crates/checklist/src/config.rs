//! Session settings.

use serde::Deserialize;

use crate::error::ConfigError;

/// Key holding the serialized list, used for both reads and writes.
pub const DEFAULT_STORAGE_KEY: &str = "myTodoList";
/// Delay between checking an item off and the row disappearing.
pub const DEFAULT_REMOVAL_RENDER_DELAY_MS: u32 = 2300;
pub const DEFAULT_CLEAR_PROMPT: &str = "Do you want to clear the entire list?";
pub const DEFAULT_ADDED_SUFFIX: &str = "added to the list";
pub const DEFAULT_REMOVED_SUFFIX: &str = "removed from list";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage_key: String,
    pub removal_render_delay_ms: u32,
    pub clear_prompt: String,
    /// Appended to the item text in the status line after a submission.
    pub added_suffix: String,
    /// Appended to the item text in the status line after a completion.
    pub removed_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            removal_render_delay_ms: DEFAULT_REMOVAL_RENDER_DELAY_MS,
            clear_prompt: DEFAULT_CLEAR_PROMPT.to_owned(),
            added_suffix: DEFAULT_ADDED_SUFFIX.to_owned(),
            removed_suffix: DEFAULT_REMOVED_SUFFIX.to_owned(),
        }
    }
}

impl Config {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_removal_render_delay_ms(mut self, delay_ms: u32) -> Self {
        self.removal_render_delay_ms = delay_ms;
        self
    }

    pub(crate) fn added_message(&self, text: &str) -> String {
        format!("{text} {}.", self.added_suffix)
    }

    pub(crate) fn removed_message(&self, text: &str) -> String {
        format!("{text} {}.", self.removed_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "removal_render_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.removal_render_delay_ms, 500);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.clear_prompt, DEFAULT_CLEAR_PROMPT);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Config::from_json(r#"{ "storage_kee": "x" }"#).is_err());
    }

    #[test]
    fn status_messages() {
        let config = Config::default();
        assert_eq!(config.added_message("Buy milk"), "Buy milk added to the list.");
        assert_eq!(config.removed_message("Buy milk"), "Buy milk removed from list.");
    }
}
