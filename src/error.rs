//! Error type for platform capability failures.
//!
//! These never escape the controller: every operation is best-effort, so
//! failures are logged and the page keeps whatever state it already had.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("preference storage unavailable")]
    StorageUnavailable,
    #[error("preference storage error: {0}")]
    Storage(String),
    #[error("document has no root element")]
    MissingRoot,
    #[error("document error: {0}")]
    Document(String),
    #[error("event listener error: {0}")]
    Listener(String),
    #[error("invalid config field: {0}")]
    InvalidConfig(&'static str),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ThemeError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StorageUnavailable => "E_STORAGE_UNAVAILABLE",
            Self::Storage(_) => "E_STORAGE",
            Self::MissingRoot => "E_MISSING_ROOT",
            Self::Document(_) => "E_DOCUMENT",
            Self::Listener(_) => "E_LISTENER",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}
