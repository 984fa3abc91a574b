//! Default names shared by the controller and the browser bindings.

/// `localStorage` key holding the explicit theme choice.
pub const STORAGE_KEY: &str = "theme-preference";

/// Attribute on `<html>` that stylesheets select on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the toggle button.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Class of the screen-reader text node inside the toggle button.
pub const HIDDEN_TEXT_CLASS: &str = "visually-hidden";

/// Media query reporting a dark system color scheme.
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Accessible-label attribute set on the toggle button.
pub const ARIA_LABEL: &str = "aria-label";

/// Default console log level for the browser build.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Labels describe the state the button switches *to*.
pub const LABEL_TO_LIGHT: &str = "Switch to light mode";
pub const LABEL_TO_DARK: &str = "Switch to dark mode";
