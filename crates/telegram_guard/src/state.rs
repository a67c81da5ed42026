//! Guard phase state machine.
//!
//! `Unknown` resolves exactly once, at mount, to either `Clear` or `Blocking`. The only later
//! transition is `Blocking -> Clear(Dismissed)`. Side effects are returned to the caller as
//! [`GuardEffect`] values rather than performed here.

use thiserror::Error;

use crate::TelegramDetection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why the guard lets the wrapped content through.
pub enum ClearReason {
    /// No Telegram signal matched.
    NotTelegram,
    /// A dismissal record already existed at mount.
    PreviouslyDismissed,
    /// The user dismissed the prompt during this mount.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Guard lifecycle phase.
pub enum GuardPhase {
    /// Detection has not run yet.
    #[default]
    Unknown,
    /// Wrapped content renders unchanged.
    Clear(ClearReason),
    /// The blocking overlay is shown.
    Blocking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// User-triggered guard actions.
pub enum GuardAction {
    /// "Continue anyway".
    Dismiss,
    /// "Open in external browser".
    OpenExternally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects requested by a transition.
pub enum GuardEffect {
    /// Write the durable dismissal record.
    PersistDismissal,
    /// Hand the current page address to an external-browser escape mechanism.
    OpenExternalUrl,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Guard transition errors.
pub enum GuardError {
    /// `activate` ran on a guard that already left `Unknown`.
    #[error("guard already activated")]
    AlreadyActivated,
    /// An action arrived before `activate`.
    #[error("guard not activated")]
    NotActivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-mount guard state.
pub struct GuardState {
    phase: GuardPhase,
    telegram: bool,
}

impl GuardState {
    /// Resolves `Unknown` from the detection outcome and the stored dismissal record.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::AlreadyActivated`] when called twice on the same state.
    pub fn activate(
        &mut self,
        detection: &TelegramDetection,
        dismissal_recorded: bool,
    ) -> Result<GuardPhase, GuardError> {
        if self.phase != GuardPhase::Unknown {
            return Err(GuardError::AlreadyActivated);
        }
        self.telegram = detection.is_telegram();
        self.phase = match (self.telegram, dismissal_recorded) {
            (false, _) => GuardPhase::Clear(ClearReason::NotTelegram),
            (true, true) => GuardPhase::Clear(ClearReason::PreviouslyDismissed),
            (true, false) => GuardPhase::Blocking,
        };
        Ok(self.phase)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Returns whether the overlay should be shown.
    pub fn is_blocking(&self) -> bool {
        self.phase == GuardPhase::Blocking
    }

    /// Returns the detection result captured at activation.
    pub fn is_telegram(&self) -> bool {
        self.telegram
    }
}

/// Applies a [`GuardAction`] and collects the resulting side effects.
///
/// # Errors
///
/// Returns [`GuardError::NotActivated`] when the state is still `Unknown`.
pub fn reduce_guard(
    state: &mut GuardState,
    action: GuardAction,
) -> Result<Vec<GuardEffect>, GuardError> {
    if state.phase == GuardPhase::Unknown {
        return Err(GuardError::NotActivated);
    }

    let mut effects = Vec::new();
    match action {
        GuardAction::Dismiss => {
            if state.phase == GuardPhase::Blocking {
                state.phase = GuardPhase::Clear(ClearReason::Dismissed);
                effects.push(GuardEffect::PersistDismissal);
            }
        }
        // Leaving the page is the only way out; a failed open keeps the overlay up.
        GuardAction::OpenExternally => effects.push(GuardEffect::OpenExternalUrl),
    }
    Ok(effects)
}
