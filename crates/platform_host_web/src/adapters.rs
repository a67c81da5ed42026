use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{AnchorExternalUrlService, TelegramOpenLinkService, WebHostEnvironment, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Native
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the browser service bundle consumed by the guard.
///
/// On native targets every adapter is inert: no environment signals, empty storage, and
/// escape mechanisms that report themselves unsupported.
pub fn build_host_services() -> HostServices {
    HostServices {
        environment: Rc::new(WebHostEnvironment),
        prefs: Rc::new(WebPrefsStore),
        open_link_bridge: Rc::new(TelegramOpenLinkService),
        anchor_fallback: Rc::new(AnchorExternalUrlService),
        host_strategy: selected_host_strategy(),
    }
}
