//! Controller configuration.
//!
//! Every field defaults to the names in [`crate::consts`], so a host page only
//! passes the fields it wants to change, e.g. `{"storage_key": "site-theme"}`.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DARK_QUERY, DEFAULT_LOG_LEVEL, HIDDEN_TEXT_CLASS, STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_ID,
};
use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key for the explicit choice.
    pub storage_key: String,
    /// Root element attribute carrying the applied theme.
    pub attribute: String,
    /// Element id of the toggle control.
    pub toggle_id: String,
    /// Class of the screen-reader text node inside the toggle.
    pub hidden_text_class: String,
    /// Media query for the dark system color scheme.
    pub dark_query: String,
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            hidden_text_class: HIDDEN_TEXT_CLASS.to_owned(),
            dark_query: DARK_QUERY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ConfigParse`] for malformed JSON and
    /// [`ThemeError::InvalidConfig`] for an empty name or unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controller cannot act on.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let names = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("toggle_id", &self.toggle_id),
            ("hidden_text_class", &self.hidden_text_class),
            ("dark_query", &self.dark_query),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(field));
            }
        }
        if self.level().is_none() {
            return Err(ThemeError::InvalidConfig("log_level"));
        }
        Ok(())
    }

    /// Parsed log level, if the name is recognized.
    #[must_use]
    pub fn level(&self) -> Option<log::Level> {
        self.log_level.parse().ok()
    }
}
