//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for environment signal reads,
//! `localStorage` preferences, and the two external-browser escape mechanisms (Telegram's
//! `openLink` bridge and a synthesized new-context anchor). Every adapter compiles on native
//! targets as an inert fallback so dependent crates can run their tests off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the service bundle factory for runtime wiring.
pub mod adapters;
pub mod environment;
pub mod external_url;
mod globals;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use environment::WebHostEnvironment;
pub use external_url::{AnchorExternalUrlService, TelegramOpenLinkService};
pub use storage::local_prefs::WebPrefsStore;
