//! Telegram in-app browser guard.
//!
//! [`InAppBrowserGuard`] wraps page content and, when the page is rendered inside Telegram's
//! embedded browser and the user has not chosen to continue there before, covers it with a modal
//! that offers to reopen the page in an external browser.
//!
//! Everything below the component is target-neutral and driven through [`platform_host`]
//! contracts:
//! - [`detect`]: heuristic environment sniffing
//! - [`state`]: the `Unknown -> Clear | Blocking` phase machine
//! - [`dismissal`]: the durable "continue anyway" record
//! - [`external`]: escape-mechanism routing
//! - [`session`]: one mounted instance tying them together

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod component;
pub mod config;
pub mod detect;
pub mod dismissal;
pub mod external;
pub mod session;
pub mod state;

pub use component::InAppBrowserGuard;
pub use config::{GuardConfig, GuardCopy, GUARD_MANIFEST_SCHEMA_VERSION};
pub use detect::{detect_telegram, matching_user_agent_tokens, DetectionSignal, TelegramDetection};
pub use dismissal::{is_dismissed, record_dismissal};
pub use external::{open_externally, select_route, ExternalOpenRoute};
pub use session::{ExternalOpenTask, GuardSession};
pub use state::{
    reduce_guard, ClearReason, GuardAction, GuardEffect, GuardError, GuardPhase, GuardState,
};
