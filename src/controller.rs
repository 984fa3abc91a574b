//! Theme preference controller.
//!
//! Resolves the theme from the stored explicit choice, then the platform
//! color scheme, then light. Applies it to the root element, keeps the
//! toggle label describing the next theme, and follows color-scheme changes
//! only while no explicit choice is stored.
//!
//! ORDERING
//! ========
//! [`ThemeController::initialize`] applies the resolved theme synchronously
//! before registering anything, so the attribute is set before first paint
//! regardless of how long the document takes to become ready. Toggle binding
//! waits for readiness; the color-scheme subscription does not need the DOM.

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::platform::{ColorScheme, PreferenceStore, ThemeDocument, ToggleControl};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, D, C> {
    config: ThemeConfig,
    store: S,
    document: D,
    color_scheme: Option<C>,
}

impl<S, D, C> ThemeController<S, D, C>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
    C: ColorScheme + 'static,
{
    /// Build a controller. `color_scheme` is `None` when the platform has no
    /// color-scheme query.
    pub fn new(config: ThemeConfig, store: S, document: D, color_scheme: Option<C>) -> Self {
        Self { config, store, document, color_scheme }
    }

    // --- Queries ---

    /// The explicit user choice, if one is stored. Empty values count as unset;
    /// unrecognized values resolve to light.
    #[must_use]
    pub fn persisted_theme(&self) -> Option<Theme> {
        self.store
            .get(&self.config.storage_key)
            .filter(|value| !value.is_empty())
            .map(|value| Theme::from_value(&value))
    }

    /// The platform color-scheme snapshot, light without the capability.
    #[must_use]
    pub fn system_theme(&self) -> Theme {
        self.color_scheme
            .as_ref()
            .map_or(Theme::Light, |scheme| Theme::from_dark(scheme.prefers_dark()))
    }

    /// Stored choice, else system preference, else light.
    #[must_use]
    pub fn resolve_preference(&self) -> Theme {
        self.persisted_theme().unwrap_or_else(|| self.system_theme())
    }

    /// The theme currently on the root element, light if unset.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.document
            .root_attribute(&self.config.attribute)
            .map_or(Theme::Light, |value| Theme::from_value(&value))
    }

    // --- Effects ---

    /// Write `theme` to the root element attribute.
    pub fn apply_theme(&self, theme: Theme) {
        if let Err(err) = self.document.set_root_attribute(&self.config.attribute, theme.as_str()) {
            log::warn!("theme: failed to apply {theme}: {err}");
        }
    }

    /// Point the toggle's label (and its screen-reader text) at the theme a
    /// click would switch to. No-op without a toggle.
    pub fn refresh_toggle_label(&self, theme: Theme) {
        let Some(control) = self.document.toggle_control(&self.config.toggle_id) else {
            return;
        };
        let label = theme.toggle_label();
        if let Err(err) = control.set_label(label) {
            log::warn!("theme: failed to set toggle label: {err}");
        }
        if let Err(err) = control.mirror_hidden_text(&self.config.hidden_text_class, label) {
            log::warn!("theme: failed to update toggle text: {err}");
        }
    }

    /// Flip the applied theme and store it as the explicit choice.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current_theme().opposite();
        self.apply_theme(next);
        self.refresh_toggle_label(next);
        if let Err(err) = self.store.set(&self.config.storage_key, next.as_str()) {
            log::warn!("theme: failed to persist {next}: {err}");
        }
        log::debug!("theme: toggled to {next}");
        next
    }

    /// Handle a platform color-scheme change. Returns whether it was applied;
    /// a stored explicit choice suppresses it.
    pub fn follow_system(&self, dark: bool) -> bool {
        if self.persisted_theme().is_some() {
            log::debug!("theme: ignoring system change, explicit choice stored");
            return false;
        }
        let theme = Theme::from_dark(dark);
        self.apply_theme(theme);
        self.refresh_toggle_label(theme);
        true
    }

    // --- Lifecycle ---

    /// Apply the resolved theme now, bind the toggle once the document is
    /// ready, and subscribe to color-scheme changes. Call once per page.
    pub fn initialize(self: Rc<Self>) {
        let theme = self.resolve_preference();
        self.apply_theme(theme);
        log::debug!("theme: applied {theme} on load");

        if self.document.is_loading() {
            let controller = Rc::clone(&self);
            let bind = Box::new(move || controller.bind_toggle());
            if let Err(err) = self.document.on_ready(bind) {
                log::warn!("theme: failed to defer toggle binding: {err}");
            }
        } else {
            Rc::clone(&self).bind_toggle();
        }

        self.subscribe_system_changes();
    }

    fn bind_toggle(self: Rc<Self>) {
        if let Some(control) = self.document.toggle_control(&self.config.toggle_id) {
            let controller = Rc::clone(&self);
            let handler = Box::new(move || {
                controller.toggle_theme();
            });
            if let Err(err) = control.on_activate(handler) {
                log::warn!("theme: failed to bind toggle: {err}");
            }
        }
        // The control did not exist when the theme was first applied.
        self.refresh_toggle_label(self.current_theme());
    }

    fn subscribe_system_changes(self: Rc<Self>) {
        let Some(scheme) = self.color_scheme.as_ref() else {
            return;
        };
        let controller = Rc::clone(&self);
        let handler = Box::new(move |dark: bool| {
            controller.follow_system(dark);
        });
        if let Err(err) = scheme.on_change(handler) {
            log::warn!("theme: failed to subscribe to color-scheme changes: {err}");
        }
    }
}
