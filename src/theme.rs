//! The two-valued display theme.

use crate::consts::{LABEL_TO_DARK, LABEL_TO_LIGHT};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage form: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored or attribute value. Only `"dark"` is dark.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == Self::Dark.as_str() { Self::Dark } else { Self::Light }
    }

    /// Map a color-scheme "is dark" signal.
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the toggle while this theme is applied.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => LABEL_TO_LIGHT,
            Self::Light => LABEL_TO_DARK,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
