//! Shared host-bundle model for browser and native composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, HostEnvironment, NoopExternalUrlService, NoopHostEnvironment,
    NoopPrefsStore, PrefsStore,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`wasm32`).
    Browser,
    /// Native composition with inert adapters, used by tests and tooling.
    Native,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Native => "native",
        }
    }
}

/// Host service bundle injected into the guard.
///
/// All environment-specific service selection happens before this bundle reaches UI code, which
/// keeps the guard decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Environment signal reader.
    pub environment: Rc<dyn HostEnvironment>,
    /// Durable preference store holding the dismissal record.
    pub prefs: Rc<dyn PrefsStore>,
    /// Host-provided "open external link" bridge.
    pub open_link_bridge: Rc<dyn ExternalUrlService>,
    /// Synthesized new-context navigation used when no bridge is present.
    pub anchor_fallback: Rc<dyn ExternalUrlService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle with no signals, no storage, and inert escape mechanisms.
    pub fn noop() -> Self {
        Self {
            environment: Rc::new(NoopHostEnvironment),
            prefs: Rc::new(NoopPrefsStore),
            open_link_bridge: Rc::new(NoopExternalUrlService),
            anchor_fallback: Rc::new(NoopExternalUrlService),
            host_strategy: HostStrategy::Native,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
