//! Host environment signal contracts.
//!
//! The guard never touches ambient globals directly. Everything it needs to know about the page
//! it runs in (the client identification string, injected bridge objects, the current address)
//! is read through [`HostEnvironment`] so detection policy stays testable off-browser.

use std::collections::BTreeSet;

/// Global injected by Telegram's mobile webviews to proxy postEvent calls.
pub const TELEGRAM_WEBVIEW_PROXY_GLOBAL: &str = "TelegramWebviewProxy";

/// General Telegram application object (`window.Telegram`) injected by Telegram clients and the
/// Web App script.
pub const TELEGRAM_GLOBAL: &str = "Telegram";

/// Read-only view of the page's hosting environment.
pub trait HostEnvironment {
    /// Returns the client identification string (`navigator.userAgent` in browsers).
    ///
    /// # Errors
    ///
    /// Returns an error when the identification string cannot be read.
    fn user_agent(&self) -> Result<String, String>;

    /// Returns whether a named global object is present and not `undefined`.
    fn has_global(&self, name: &str) -> bool;

    /// Returns whether the host exposes an "open external link" capability
    /// (`Telegram.WebApp.openLink`).
    fn has_open_link_bridge(&self) -> bool;

    /// Returns the current page address.
    ///
    /// # Errors
    ///
    /// Returns an error when the address cannot be read.
    fn current_url(&self) -> Result<String, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Environment with no signals, used for unsupported targets and baseline tests.
pub struct NoopHostEnvironment;

impl HostEnvironment for NoopHostEnvironment {
    fn user_agent(&self) -> Result<String, String> {
        Ok(String::new())
    }

    fn has_global(&self, _name: &str) -> bool {
        false
    }

    fn has_open_link_bridge(&self) -> bool {
        false
    }

    fn current_url(&self) -> Result<String, String> {
        Err("current url unavailable on this host".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Scriptable in-memory environment.
pub struct MemoryHostEnvironment {
    user_agent: Option<String>,
    globals: BTreeSet<String>,
    open_link_bridge: bool,
    current_url: Option<String>,
}

impl MemoryHostEnvironment {
    /// Creates an environment reporting the given client identification string.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            ..Self::default()
        }
    }

    /// Marks a named global as present.
    pub fn global(mut self, name: impl Into<String>) -> Self {
        self.globals.insert(name.into());
        self
    }

    /// Exposes `Telegram.WebApp.openLink`, which implies the `Telegram` global.
    pub fn open_link_bridge(mut self) -> Self {
        self.open_link_bridge = true;
        self.globals.insert(TELEGRAM_GLOBAL.to_string());
        self
    }

    /// Sets the current page address.
    pub fn at_url(mut self, url: impl Into<String>) -> Self {
        self.current_url = Some(url.into());
        self
    }
}

impl HostEnvironment for MemoryHostEnvironment {
    fn user_agent(&self) -> Result<String, String> {
        self.user_agent
            .clone()
            .ok_or_else(|| "user agent unavailable".to_string())
    }

    fn has_global(&self, name: &str) -> bool {
        self.globals.contains(name)
    }

    fn has_open_link_bridge(&self) -> bool {
        self.open_link_bridge
    }

    fn current_url(&self) -> Result<String, String> {
        self.current_url
            .clone()
            .ok_or_else(|| "current url unavailable".to_string())
    }
}
