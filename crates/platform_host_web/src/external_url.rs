//! External URL escape mechanisms for Telegram webviews and plain browsers.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::globals;

#[derive(Debug, Clone, Copy, Default)]
/// Hands the URL to `window.Telegram.WebApp.openLink`, which Telegram clients route to the
/// system browser.
pub struct TelegramOpenLinkService;

impl ExternalUrlService for TelegramOpenLinkService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_with_telegram_bridge(url) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Synthesizes a transient `<a target="_blank" rel="noopener noreferrer">`, clicks it, and
/// detaches it again.
pub struct AnchorExternalUrlService;

impl ExternalUrlService for AnchorExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_with_anchor(url) })
    }
}

fn open_with_telegram_bridge(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let (web_app, open_link) = globals::telegram_open_link()
            .ok_or_else(|| "Telegram.WebApp.openLink unavailable".to_string())?;
        open_link
            .call1(&web_app, &JsValue::from_str(url))
            .map(|_| ())
            .map_err(|err| format!("openLink failed: {}", globals::js_error_to_string(err)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err("Telegram bridge is only available when compiled for wasm32".to_string())
    }
}

fn open_with_anchor(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = globals::window()?
            .document()
            .ok_or_else(|| "document unavailable".to_string())?;
        let body = document
            .body()
            .ok_or_else(|| "document body unavailable".to_string())?;
        let anchor = document
            .create_element("a")
            .map_err(|err| format!("failed to create anchor: {err:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "failed to cast anchor".to_string())?;
        anchor.set_href(url);
        anchor.set_target("_blank");
        anchor.set_rel("noopener noreferrer");
        anchor.set_hidden(true);

        body.append_child(&anchor)
            .map_err(|err| format!("failed to attach anchor: {err:?}"))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err("anchor navigation is only available when compiled for wasm32".to_string())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn escape_mechanisms_non_wasm_report_unsupported() {
        let bridge: &dyn ExternalUrlService = &TelegramOpenLinkService;
        let anchor: &dyn ExternalUrlService = &AnchorExternalUrlService;

        let bridge_err = block_on(bridge.open_url("https://example.test")).expect_err("bridge");
        let anchor_err = block_on(anchor.open_url("https://example.test")).expect_err("anchor");
        assert!(bridge_err.contains("wasm32"));
        assert!(anchor_err.contains("wasm32"));
    }
}
