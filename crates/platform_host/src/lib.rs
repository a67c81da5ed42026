//! Typed host-domain contracts and shared test doubles used by the guard and its browser adapters.
//!
//! This crate is the API-first boundary for everything the in-app browser guard reads from or
//! hands off to its hosting page: environment signals, durable preference storage, and external
//! URL escape mechanisms. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod environment;
pub mod external_url;
pub mod host;
pub mod storage;

pub use environment::{
    HostEnvironment, MemoryHostEnvironment, NoopHostEnvironment, TELEGRAM_GLOBAL,
    TELEGRAM_WEBVIEW_PROXY_GLOBAL,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
};
