//! External-browser escape routing.

use platform_host::{ExternalUrlService, HostEnvironment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Escape mechanism used for one open attempt.
pub enum ExternalOpenRoute {
    /// `Telegram.WebApp.openLink`.
    TelegramBridge,
    /// Synthesized `target="_blank"` anchor.
    AnchorFallback,
}

impl ExternalOpenRoute {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TelegramBridge => "telegram-bridge",
            Self::AnchorFallback => "anchor-fallback",
        }
    }
}

/// Picks the escape mechanism the environment supports.
pub fn select_route<E: HostEnvironment + ?Sized>(env: &E) -> ExternalOpenRoute {
    if env.has_open_link_bridge() {
        ExternalOpenRoute::TelegramBridge
    } else {
        ExternalOpenRoute::AnchorFallback
    }
}

/// Hands the current page address to exactly one escape mechanism.
///
/// The bridge wins whenever it exists; a bridge failure is returned as-is rather than retried
/// through the anchor, which Telegram webviews would open in-app anyway.
///
/// # Errors
///
/// Returns an error when the current address cannot be read or the chosen mechanism fails.
pub async fn open_externally<E, B, F>(
    env: &E,
    bridge: &B,
    fallback: &F,
) -> Result<ExternalOpenRoute, String>
where
    E: HostEnvironment + ?Sized,
    B: ExternalUrlService + ?Sized,
    F: ExternalUrlService + ?Sized,
{
    let url = env.current_url()?;
    let route = select_route(env);
    match route {
        ExternalOpenRoute::TelegramBridge => bridge.open_url(&url).await?,
        ExternalOpenRoute::AnchorFallback => fallback.open_url(&url).await?,
    }
    Ok(route)
}
