//! Light/dark theme preference controller for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and invoked from the document head.
//! It resolves the active theme from an explicit stored choice or the
//! platform color-scheme preference, writes it to the root element's
//! `data-theme` attribute before first paint, keeps the toggle control's
//! accessible label in sync, and follows live color-scheme changes until the
//! user picks a theme explicitly.
//!
//! All browser access goes through the capability traits in [`platform`], so
//! the [`controller`] logic runs natively in tests against the [`memory`]
//! implementations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`]: resolve, apply, toggle, initialize |
//! | [`theme`] | The two-valued [`theme::Theme`] and its label/attribute forms |
//! | [`platform`] | Store, document, toggle-control and color-scheme capabilities |
//! | [`memory`] | In-memory capability implementations |
//! | [`config`] | [`config::ThemeConfig`] and JSON loading |
//! | [`error`] | [`error::ThemeError`] |
//! | [`consts`] | Default names and label strings |
//! | `web` | Browser capabilities and wasm-bindgen entry points (`hydrate` feature) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod memory;
pub mod platform;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
