//! Telegram in-app browser detection.
//!
//! Detection is a heuristic: user-agent substring sniffing plus global-object presence checks.
//! Any single signal classifies the page as Telegram. Anything inconclusive, including a failed
//! user-agent read, classifies it as a regular browser.

use leptos::logging;
use platform_host::HostEnvironment;

use crate::GuardConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One matched detection signal.
pub enum DetectionSignal {
    /// The client identification string contains this configured token.
    UserAgentToken(String),
    /// This configured global object is present.
    Global(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outcome of one detection pass.
pub struct TelegramDetection {
    signals: Vec<DetectionSignal>,
}

impl TelegramDetection {
    /// Returns whether any signal matched.
    pub fn is_telegram(&self) -> bool {
        !self.signals.is_empty()
    }

    /// Returns every matched signal, user-agent tokens first.
    pub fn signals(&self) -> &[DetectionSignal] {
        &self.signals
    }
}

/// Returns every configured token found in `user_agent`, ignoring letter case.
pub fn matching_user_agent_tokens<'a>(user_agent: &str, tokens: &'a [String]) -> Vec<&'a str> {
    let user_agent = user_agent.to_lowercase();
    tokens
        .iter()
        .map(String::as_str)
        .filter(|token| !token.is_empty() && user_agent.contains(&token.to_lowercase()))
        .collect()
}

/// Inspects the hosting environment for Telegram signals.
pub fn detect_telegram<E: HostEnvironment + ?Sized>(
    env: &E,
    config: &GuardConfig,
) -> TelegramDetection {
    let mut signals = Vec::new();

    match env.user_agent() {
        Ok(user_agent) => signals.extend(
            matching_user_agent_tokens(&user_agent, &config.user_agent_tokens)
                .into_iter()
                .map(|token| DetectionSignal::UserAgentToken(token.to_string())),
        ),
        Err(err) => logging::warn!("telegram guard user agent read failed: {err}"),
    }

    signals.extend(
        config
            .bridge_globals
            .iter()
            .filter(|name| env.has_global(name))
            .map(|name| DetectionSignal::Global(name.clone())),
    );

    TelegramDetection { signals }
}

#[cfg(test)]
mod tests {
    use platform_host::{
        MemoryHostEnvironment, NoopHostEnvironment, TELEGRAM_GLOBAL,
        TELEGRAM_WEBVIEW_PROXY_GLOBAL,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn detect(env: &MemoryHostEnvironment) -> TelegramDetection {
        detect_telegram(env, GuardConfig::builtin())
    }

    #[test]
    fn user_agent_tokens_match_in_any_letter_case() {
        for user_agent in [
            "TelegramBot/1.0",
            "Mozilla/5.0 (Linux; Android 14) Telegram-Android/10.14.5",
            "mozilla/5.0 TELEGRAM",
            "Mozilla/5.0 TDesktop/4.16",
            "tdesktop",
        ] {
            let detection = detect(&MemoryHostEnvironment::with_user_agent(user_agent));
            assert!(detection.is_telegram(), "{user_agent} should be detected");
        }
    }

    #[test]
    fn regular_browsers_are_not_detected() {
        let detection = detect(&MemoryHostEnvironment::with_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0",
        ));
        assert!(!detection.is_telegram());
        assert!(detection.signals().is_empty());
    }

    #[test]
    fn either_global_detects_regardless_of_user_agent() {
        for global in [TELEGRAM_WEBVIEW_PROXY_GLOBAL, TELEGRAM_GLOBAL] {
            let env = MemoryHostEnvironment::with_user_agent("Mozilla/5.0 Safari/605.1.15")
                .global(global);
            assert_eq!(
                detect(&env).signals(),
                &[DetectionSignal::Global(global.to_string())]
            );
        }
    }

    #[test]
    fn all_matching_signals_are_reported() {
        let env = MemoryHostEnvironment::with_user_agent("Telegram TDesktop")
            .global(TELEGRAM_WEBVIEW_PROXY_GLOBAL)
            .open_link_bridge();
        assert_eq!(
            detect(&env).signals(),
            &[
                DetectionSignal::UserAgentToken("telegram".to_string()),
                DetectionSignal::UserAgentToken("tdesktop".to_string()),
                DetectionSignal::Global(TELEGRAM_WEBVIEW_PROXY_GLOBAL.to_string()),
                DetectionSignal::Global(TELEGRAM_GLOBAL.to_string()),
            ]
        );
    }

    #[test]
    fn unreadable_user_agent_fails_open() {
        let detection = detect(&MemoryHostEnvironment::default());
        assert!(!detection.is_telegram());

        let detection = detect_telegram(&NoopHostEnvironment, GuardConfig::builtin());
        assert!(!detection.is_telegram());
    }

    #[test]
    fn unreadable_user_agent_still_honours_globals() {
        let env = MemoryHostEnvironment::default().global(TELEGRAM_WEBVIEW_PROXY_GLOBAL);
        assert!(detect(&env).is_telegram());
    }

    #[test]
    fn empty_tokens_never_match() {
        let tokens = vec![String::new(), "Telegram".to_string()];
        assert_eq!(
            matching_user_agent_tokens("some telegram client", &tokens),
            vec!["Telegram"]
        );
        assert!(matching_user_agent_tokens("anything", &[String::new()]).is_empty());
    }
}
