//! Headless-browser checks for what `InAppBrowserGuard` puts in the DOM.
//!
//! Run with `wasm-pack test --headless --firefox crates/telegram_guard`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use leptos::*;
use platform_host::{
    HostServices, HostStrategy, MemoryExternalUrlService, MemoryHostEnvironment, MemoryPrefsStore,
    PrefsStore,
};
use telegram_guard::InAppBrowserGuard;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "telegram-browser-dismissed";
const URL: &str = "https://games.example.test/";
const OVERLAY: &str = r#"[data-ui-slot="telegram-guard"]"#;
const CONTENT: &str = r#"[data-test="content"]"#;

fn services(env: MemoryHostEnvironment, prefs: &MemoryPrefsStore) -> HostServices {
    HostServices {
        environment: Rc::new(env),
        prefs: Rc::new(prefs.clone()),
        open_link_bridge: Rc::new(MemoryExternalUrlService::default()),
        anchor_fallback: Rc::new(MemoryExternalUrlService::default()),
        host_strategy: HostStrategy::Browser,
    }
}

fn mount_guard(services: HostServices) -> web_sys::HtmlElement {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let container = document
        .create_element("div")
        .expect("create container")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("container is an html element");
    document
        .body()
        .expect("document body")
        .append_child(&container)
        .expect("attach container");

    mount_to(container.clone(), move || {
        view! {
            <InAppBrowserGuard services=services>
                <p data-test="content">"Game lobby"</p>
            </InAppBrowserGuard>
        }
    });
    container
}

fn find(container: &web_sys::HtmlElement, selector: &str) -> Option<web_sys::Element> {
    container.query_selector(selector).expect("valid selector")
}

fn telegram_bot() -> MemoryHostEnvironment {
    MemoryHostEnvironment::with_user_agent("TelegramBot/1.0").at_url(URL)
}

#[wasm_bindgen_test]
fn regular_browser_renders_children_unmodified() {
    let prefs = MemoryPrefsStore::default();
    let container = mount_guard(services(
        MemoryHostEnvironment::with_user_agent("Mozilla/5.0 Firefox/131.0").at_url(URL),
        &prefs,
    ));

    let content = find(&container, CONTENT).expect("children rendered");
    assert_eq!(content.text_content().as_deref(), Some("Game lobby"));
    assert!(find(&container, OVERLAY).is_none());
    assert!(find(&container, "[data-ui-primitive]").is_none());
    assert!(prefs.snapshot().is_empty());
}

#[wasm_bindgen_test]
fn telegram_signal_replaces_children_with_overlay() {
    let prefs = MemoryPrefsStore::default();
    let container = mount_guard(services(telegram_bot(), &prefs));

    assert!(find(&container, OVERLAY).is_some());
    assert!(find(&container, CONTENT).is_none());

    let dialog = find(&container, r#"[role="dialog"]"#).expect("dialog");
    assert_eq!(dialog.get_attribute("aria-modal").as_deref(), Some("true"));
    assert!(find(&container, r#"[data-ui-slot="open-external"]"#).is_some());
}

#[wasm_bindgen_test]
fn dismiss_click_restores_children_and_records_choice() {
    let prefs = MemoryPrefsStore::default();
    let container = mount_guard(services(telegram_bot(), &prefs));

    find(&container, r#"[data-ui-slot="dismiss"]"#)
        .expect("dismiss button")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("dismiss button is an html element")
        .click();

    assert!(find(&container, OVERLAY).is_none());
    assert!(find(&container, CONTENT).is_some());
    assert_eq!(prefs.load_pref(KEY).expect("load"), Some("true".to_string()));
}

#[wasm_bindgen_test]
fn existing_record_renders_children() {
    let prefs = MemoryPrefsStore::default();
    prefs.save_pref(KEY, "1").expect("seed");
    let container = mount_guard(services(
        MemoryHostEnvironment::default()
            .global(platform_host::TELEGRAM_WEBVIEW_PROXY_GLOBAL)
            .at_url(URL),
        &prefs,
    ));

    assert!(find(&container, CONTENT).is_some());
    assert!(find(&container, OVERLAY).is_none());
}
