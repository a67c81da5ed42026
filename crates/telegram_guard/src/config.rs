//! Guard configuration: dismissal key, detection signals, and overlay copy.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/guard_manifest_generated.rs"));

/// Manifest schema understood by this build.
pub const GUARD_MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// User-facing overlay text.
pub struct GuardCopy {
    /// Dialog heading.
    pub headline: String,
    /// Explanatory paragraph under the heading.
    pub body: String,
    /// Primary "open externally" button label.
    pub open_button: String,
    /// Lead-in for the manual fallback instructions.
    pub manual_heading: String,
    /// Mobile instructions label.
    pub mobile_label: String,
    /// Mobile manual steps.
    pub mobile_steps: String,
    /// Desktop instructions label.
    pub desktop_label: String,
    /// Desktop manual steps.
    pub desktop_steps: String,
    /// Secondary "continue anyway" button label.
    pub dismiss_button: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Runtime guard configuration.
///
/// [`GuardConfig::builtin`] returns the manifest embedded at build time; hosts that need
/// different copy or signals construct their own value and pass it to the component.
pub struct GuardConfig {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Durable storage key holding the dismissal record.
    pub dismissal_key: String,
    /// Case-insensitive user-agent substrings identifying Telegram.
    pub user_agent_tokens: Vec<String>,
    /// Global object names whose presence identifies Telegram.
    pub bridge_globals: Vec<String>,
    /// Overlay text.
    pub copy: GuardCopy,
}

impl GuardConfig {
    /// Returns the configuration embedded from `guard.manifest.toml`.
    pub fn builtin() -> &'static Self {
        static CONFIG: OnceLock<GuardConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            serde_json::from_str(GUARD_MANIFEST_JSON)
                .expect("generated guard manifest should parse")
        })
    }

    /// Returns the generated manifest JSON payload.
    pub fn builtin_json() -> &'static str {
        GUARD_MANIFEST_JSON
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
