//! In-memory capability implementations.
//!
//! Each handle is an `Rc` around shared state, so a clone given to the
//! controller and a clone kept by the caller observe the same store,
//! document or color scheme. Events are fired explicitly:
//! [`MemoryDocument::finish_loading`], [`MemoryToggle::activate`] and
//! [`MemoryColorScheme::set_dark`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::platform::{ColorScheme, PreferenceStore, ThemeDocument, ToggleControl};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, like a full or sandboxed `localStorage`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.read_only.get() {
            return Err(ThemeError::Storage(format!("write to {key} rejected")));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// TOGGLE CONTROL
// =============================================================================

#[derive(Default)]
struct ToggleState {
    label: RefCell<Option<String>>,
    hidden_class: Option<String>,
    hidden_text: RefCell<String>,
    handlers: RefCell<Vec<Rc<dyn Fn()>>>,
}

#[derive(Clone, Default)]
pub struct MemoryToggle {
    state: Rc<ToggleState>,
}

impl MemoryToggle {
    /// A toggle without a screen-reader text node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A toggle containing one text node with class `class`.
    #[must_use]
    pub fn with_hidden_text(class: &str) -> Self {
        Self {
            state: Rc::new(ToggleState {
                hidden_class: Some(class.to_owned()),
                ..ToggleState::default()
            }),
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.state.label.borrow().clone()
    }

    /// Contents of the screen-reader text node, `None` if there is none.
    #[must_use]
    pub fn hidden_text(&self) -> Option<String> {
        self.state
            .hidden_class
            .as_ref()
            .map(|_| self.state.hidden_text.borrow().clone())
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.state.handlers.borrow().len()
    }

    /// Simulate a click.
    pub fn activate(&self) {
        let handlers: Vec<Rc<dyn Fn()>> = self.state.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl ToggleControl for MemoryToggle {
    fn set_label(&self, label: &str) -> Result<(), ThemeError> {
        *self.state.label.borrow_mut() = Some(label.to_owned());
        Ok(())
    }

    fn mirror_hidden_text(&self, class: &str, text: &str) -> Result<bool, ThemeError> {
        if self.state.hidden_class.as_deref() != Some(class) {
            return Ok(false);
        }
        *self.state.hidden_text.borrow_mut() = text.to_owned();
        Ok(true)
    }

    fn on_activate(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        self.state.handlers.borrow_mut().push(Rc::from(handler));
        Ok(())
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

struct DocumentState {
    attributes: RefCell<HashMap<String, String>>,
    loading: Cell<bool>,
    ready_callbacks: RefCell<Vec<Box<dyn FnOnce()>>>,
    elements: RefCell<HashMap<String, MemoryToggle>>,
}

#[derive(Clone)]
pub struct MemoryDocument {
    state: Rc<DocumentState>,
}

impl MemoryDocument {
    /// A document that has finished parsing.
    #[must_use]
    pub fn ready() -> Self {
        Self::with_loading(false)
    }

    /// A document still being parsed; see [`MemoryDocument::finish_loading`].
    #[must_use]
    pub fn loading() -> Self {
        Self::with_loading(true)
    }

    fn with_loading(loading: bool) -> Self {
        Self {
            state: Rc::new(DocumentState {
                attributes: RefCell::new(HashMap::new()),
                loading: Cell::new(loading),
                ready_callbacks: RefCell::new(Vec::new()),
                elements: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Add `toggle` to the document under `id`.
    pub fn insert_toggle(&self, id: &str, toggle: MemoryToggle) {
        self.state.elements.borrow_mut().insert(id.to_owned(), toggle);
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.attributes.borrow().get(name).cloned()
    }

    #[must_use]
    pub fn pending_ready_callbacks(&self) -> usize {
        self.state.ready_callbacks.borrow().len()
    }

    /// Mark parsing complete and run the ready callbacks once.
    pub fn finish_loading(&self) {
        if !self.state.loading.replace(false) {
            return;
        }
        let callbacks = std::mem::take(&mut *self.state.ready_callbacks.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }
}

impl ThemeDocument for MemoryDocument {
    type Control = MemoryToggle;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.state
            .attributes
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn is_loading(&self) -> bool {
        self.state.loading.get()
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), ThemeError> {
        self.state.ready_callbacks.borrow_mut().push(callback);
        Ok(())
    }

    fn toggle_control(&self, id: &str) -> Option<MemoryToggle> {
        self.state.elements.borrow().get(id).cloned()
    }
}

// =============================================================================
// COLOR SCHEME
// =============================================================================

#[derive(Clone, Default)]
pub struct MemoryColorScheme {
    dark: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<Rc<dyn Fn(bool)>>>>,
}

impl MemoryColorScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let scheme = Self::default();
        scheme.dark.set(dark);
        scheme
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Change the reported preference and notify listeners.
    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
        let listeners: Vec<Rc<dyn Fn(bool)>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(dark);
        }
    }
}

impl ColorScheme for MemoryColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn on_change(&self, handler: Box<dyn Fn(bool)>) -> Result<(), ThemeError> {
        self.listeners.borrow_mut().push(Rc::from(handler));
        Ok(())
    }
}
