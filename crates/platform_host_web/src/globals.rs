//! `window` global lookups shared by the environment and external URL adapters.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
pub(crate) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

/// Reads `target[name]`, treating `undefined` and lookup failures as absent.
#[cfg(target_arch = "wasm32")]
pub(crate) fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined())
}

/// Reads a named global on `window`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    property(&JsValue::from(window), name)
}

/// Resolves `window.Telegram.WebApp` and its `openLink` function.
#[cfg(target_arch = "wasm32")]
pub(crate) fn telegram_open_link() -> Option<(JsValue, js_sys::Function)> {
    let telegram = global(platform_host::TELEGRAM_GLOBAL)?;
    let web_app = property(&telegram, "WebApp")?;
    let open_link = property(&web_app, "openLink")?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    Some((web_app, open_link))
}
