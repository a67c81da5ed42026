//! Browser environment signal reader.

use platform_host::HostEnvironment;

#[cfg(target_arch = "wasm32")]
use crate::globals;

#[derive(Debug, Clone, Copy, Default)]
/// Reads `navigator.userAgent`, `window` globals, and `location.href`.
pub struct WebHostEnvironment;

impl HostEnvironment for WebHostEnvironment {
    fn user_agent(&self) -> Result<String, String> {
        #[cfg(target_arch = "wasm32")]
        {
            globals::window()?
                .navigator()
                .user_agent()
                .map_err(globals::js_error_to_string)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("navigator is only available when compiled for wasm32".to_string())
        }
    }

    fn has_global(&self, name: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            globals::global(name).is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            false
        }
    }

    fn has_open_link_bridge(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            globals::telegram_open_link().is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn current_url(&self) -> Result<String, String> {
        #[cfg(target_arch = "wasm32")]
        {
            globals::window()?
                .location()
                .href()
                .map_err(globals::js_error_to_string)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("location is only available when compiled for wasm32".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{TELEGRAM_GLOBAL, TELEGRAM_WEBVIEW_PROXY_GLOBAL};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_environment_non_wasm_reports_no_signals() {
        let env = WebHostEnvironment;
        assert!(env.user_agent().is_err());
        assert!(!env.has_global(TELEGRAM_GLOBAL));
        assert!(!env.has_global(TELEGRAM_WEBVIEW_PROXY_GLOBAL));
        assert!(!env.has_open_link_bridge());
        assert!(env.current_url().is_err());
    }
}
