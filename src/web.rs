//! Browser capabilities and wasm-bindgen entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Meant to be called from an inline module script in `<head>`, so the
//! theme attribute is written while the rest of the document is still being
//! parsed. Listeners registered here live for the page and are leaked with
//! `Closure::forget`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, MediaQueryList,
    MediaQueryListEvent, Storage, Window,
};

use crate::config::ThemeConfig;
use crate::consts::ARIA_LABEL;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::platform::{
    ColorScheme, PreferenceStore, ThemeDocument, ToggleControl, is_loading_state,
};

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// `localStorage`, which may be missing or throw in sandboxed frames.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        Self { storage: window.local_storage().unwrap_or_default() }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| ThemeError::Storage(describe(&err)))
    }
}

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ThemeDocument for BrowserDocument {
    type Control = BrowserToggle;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self.document.document_element().ok_or(ThemeError::MissingRoot)?;
        root.set_attribute(name, value)
            .map_err(|err| ThemeError::Document(describe(&err)))
    }

    fn is_loading(&self) -> bool {
        is_loading_state(&self.document.ready_state())
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), ThemeError> {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let listener = Closure::once_into_js(move || callback());
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|err| ThemeError::Listener(describe(&err)))
    }

    fn toggle_control(&self, id: &str) -> Option<BrowserToggle> {
        self.document
            .get_element_by_id(id)
            .map(|element| BrowserToggle { element })
    }
}

pub struct BrowserToggle {
    element: Element,
}

impl ToggleControl for BrowserToggle {
    fn set_label(&self, label: &str) -> Result<(), ThemeError> {
        self.element
            .set_attribute(ARIA_LABEL, label)
            .map_err(|err| ThemeError::Document(describe(&err)))
    }

    fn mirror_hidden_text(&self, class: &str, text: &str) -> Result<bool, ThemeError> {
        let node = self
            .element
            .query_selector(&format!(".{class}"))
            .map_err(|err| ThemeError::Document(describe(&err)))?;
        let Some(node) = node else {
            return Ok(false);
        };
        node.set_text_content(Some(text));
        Ok(true)
    }

    fn on_activate(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        let listener = Closure::wrap(handler);
        self.element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|err| ThemeError::Listener(describe(&err)))?;
        listener.forget();
        Ok(())
    }
}

/// `matchMedia` result for the dark color-scheme query.
pub struct BrowserColorScheme {
    query: MediaQueryList,
}

impl BrowserColorScheme {
    /// `None` when `matchMedia` is unsupported or rejects `query`.
    #[must_use]
    pub fn from_window(window: &Window, query: &str) -> Option<Self> {
        window
            .match_media(query)
            .unwrap_or_default()
            .map(|query| Self { query })
    }
}

impl ColorScheme for BrowserColorScheme {
    fn prefers_dark(&self) -> bool {
        self.query.matches()
    }

    fn on_change(&self, handler: Box<dyn Fn(bool)>) -> Result<(), ThemeError> {
        let listener = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            handler(event.matches());
        }) as Box<dyn Fn(MediaQueryListEvent)>);
        self.query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .map_err(|err| ThemeError::Listener(describe(&err)))?;
        listener.forget();
        Ok(())
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Initialize with the default page contract.
#[wasm_bindgen]
pub fn init_theme() {
    start(ThemeConfig::default());
}

/// Initialize with a JSON config object; missing fields take defaults.
///
/// # Errors
///
/// Rejects with a message when the config does not parse or validate.
#[wasm_bindgen]
pub fn init_theme_with_config(config: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config)
        .map_err(|err| JsValue::from_str(&format!("{}: {err}", err.error_code())))?;
    start(config);
    Ok(())
}

fn start(config: ThemeConfig) {
    console_error_panic_hook::set_once();
    if let Some(level) = config.level() {
        // A second init on the same page keeps the first logger.
        if console_log::init_with_level(level).is_err() {
            log::debug!("theme: console logger already installed");
        }
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let store = BrowserStore::from_window(&window);
    let color_scheme = BrowserColorScheme::from_window(&window, &config.dark_query);
    let controller = Rc::new(ThemeController::new(
        config,
        store,
        BrowserDocument::new(document),
        color_scheme,
    ));
    controller.initialize();
}
