//! Capabilities the controller needs from its host environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build implements these over `localStorage`, the document and
//! `matchMedia` (see the `web` module); tests and non-browser hosts use
//! [`crate::memory`]. Handles are cheap to clone and share state, the way
//! web-sys handles do.
//!
//! Read methods report absence with `None`/`false` rather than errors. Only
//! writes and listener registration can fail.

use crate::error::ThemeError;

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

/// Whether a `document.readyState` value means the document is still parsing.
#[must_use]
pub fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Synchronous origin-scoped key-value store.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when unset or the store is unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The page document: its root element, readiness and element lookup.
pub trait ThemeDocument {
    type Control: ToggleControl;

    /// Attribute `name` on the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` on the root element.
    ///
    /// # Errors
    ///
    /// Fails when there is no root element or the attribute is rejected.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether the document is still being parsed.
    fn is_loading(&self) -> bool;

    /// Run `callback` once when the document finishes parsing.
    ///
    /// Only called while [`ThemeDocument::is_loading`] is true.
    ///
    /// # Errors
    ///
    /// Fails when the listener cannot be registered.
    fn on_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), ThemeError>;

    /// Element with id `id`, if present.
    fn toggle_control(&self, id: &str) -> Option<Self::Control>;
}

/// The theme toggle button.
pub trait ToggleControl {
    /// Set the accessible label.
    ///
    /// # Errors
    ///
    /// Fails when the attribute is rejected.
    fn set_label(&self, label: &str) -> Result<(), ThemeError>;

    /// Write `text` into the first descendant with class `class`.
    ///
    /// Returns `false` when there is no such descendant.
    ///
    /// # Errors
    ///
    /// Fails when the descendant query itself fails.
    fn mirror_hidden_text(&self, class: &str, text: &str) -> Result<bool, ThemeError>;

    /// Invoke `handler` on every activation.
    ///
    /// # Errors
    ///
    /// Fails when the listener cannot be registered.
    fn on_activate(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError>;
}

/// Platform color-scheme preference.
pub trait ColorScheme {
    /// Current "prefers dark" snapshot.
    fn prefers_dark(&self) -> bool;

    /// Invoke `handler` with the new "prefers dark" value on every change.
    ///
    /// # Errors
    ///
    /// Fails when the listener cannot be registered.
    fn on_change(&self, handler: Box<dyn Fn(bool)>) -> Result<(), ThemeError>;
}
