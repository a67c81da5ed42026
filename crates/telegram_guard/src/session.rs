//! One mounted guard instance: services, configuration, detection, and phase.

use std::{future::Future, pin::Pin};

use leptos::logging;
use platform_host::HostServices;

use crate::{
    detect_telegram, is_dismissed, open_externally, record_dismissal, reduce_guard,
    ExternalOpenRoute, GuardAction, GuardConfig, GuardEffect, GuardError, GuardPhase, GuardState,
    TelegramDetection,
};

/// Detached open attempt returned by [`GuardSession::open_externally`].
pub type ExternalOpenTask = Pin<Box<dyn Future<Output = Result<ExternalOpenRoute, String>>>>;

#[derive(Debug, Clone)]
/// Guard state for the lifetime of one mount.
///
/// Dropping the session is the unmount; nothing but the dismissal record outlives it.
pub struct GuardSession {
    services: HostServices,
    config: GuardConfig,
    detection: TelegramDetection,
    state: GuardState,
}

impl GuardSession {
    /// Runs detection, reads the dismissal record, and resolves the initial phase.
    pub fn mount(services: HostServices, config: GuardConfig) -> Self {
        let detection = detect_telegram(services.environment.as_ref(), &config);
        // The record only matters when there is something to suppress.
        let dismissed = detection.is_telegram()
            && is_dismissed(services.prefs.as_ref(), &config.dismissal_key);

        let mut state = GuardState::default();
        let phase = state
            .activate(&detection, dismissed)
            .unwrap_or_else(|_| state.phase());
        logging::log!(
            "telegram guard mounted on {} host: {:?} ({} signal(s))",
            services.host_strategy.as_str(),
            phase,
            detection.signals().len()
        );

        Self {
            services,
            config,
            detection,
            state,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GuardPhase {
        self.state.phase()
    }

    /// Returns whether the overlay should be shown.
    pub fn is_blocking(&self) -> bool {
        self.state.is_blocking()
    }

    /// Returns the detection outcome captured at mount.
    pub fn detection(&self) -> &TelegramDetection {
        &self.detection
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Hides the overlay and records the dismissal. Repeated calls do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::NotActivated`] if the session never resolved its phase.
    pub fn dismiss(&mut self) -> Result<(), GuardError> {
        for effect in reduce_guard(&mut self.state, GuardAction::Dismiss)? {
            if effect == GuardEffect::PersistDismissal {
                record_dismissal(self.services.prefs.as_ref(), &self.config.dismissal_key);
            }
        }
        Ok(())
    }

    /// Starts an external open attempt. Neither the phase nor the dismissal record changes.
    ///
    /// The returned task owns its services and may be spawned on any local executor.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::NotActivated`] if the session never resolved its phase.
    pub fn open_externally(&mut self) -> Result<Option<ExternalOpenTask>, GuardError> {
        let effects = reduce_guard(&mut self.state, GuardAction::OpenExternally)?;
        if !effects.contains(&GuardEffect::OpenExternalUrl) {
            return Ok(None);
        }
        let services = self.services.clone();
        Ok(Some(Box::pin(async move {
            open_externally(
                services.environment.as_ref(),
                services.open_link_bridge.as_ref(),
                services.anchor_fallback.as_ref(),
            )
            .await
        })))
    }
}
