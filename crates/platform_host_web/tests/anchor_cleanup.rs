//! Headless-browser checks for the anchor escape mechanism.
//!
//! Run with `wasm-pack test --headless --firefox crates/platform_host_web`.

#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc};

use platform_host::ExternalUrlService;
use platform_host_web::AnchorExternalUrlService;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> web_sys::HtmlElement {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .expect("document body")
}

fn anchor_count(body: &web_sys::HtmlElement) -> u32 {
    body.query_selector_all("a").expect("query anchors").length()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClickedAnchor {
    href: String,
    target: String,
    rel: String,
}

#[wasm_bindgen_test]
async fn anchor_is_clicked_then_removed() {
    let body = body();
    let before = anchor_count(&body);

    let clicked = Rc::new(RefCell::new(Vec::<ClickedAnchor>::new()));
    let on_click = {
        let clicked = Rc::clone(&clicked);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            // Keep the headless browser from opening a real tab.
            event.prevent_default();
            if let Some(anchor) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlAnchorElement>().ok())
            {
                clicked.borrow_mut().push(ClickedAnchor {
                    href: anchor.href(),
                    target: anchor.target(),
                    rel: anchor.rel(),
                });
            }
        })
    };
    body.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .expect("listen for clicks");

    let result = AnchorExternalUrlService
        .open_url("https://games.example.test/table/7")
        .await;

    body.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .expect("stop listening");

    assert_eq!(result, Ok(()));
    assert_eq!(
        *clicked.borrow(),
        vec![ClickedAnchor {
            href: "https://games.example.test/table/7".to_string(),
            target: "_blank".to_string(),
            rel: "noopener noreferrer".to_string(),
        }]
    );
    assert_eq!(anchor_count(&body), before);
}

#[wasm_bindgen_test]
async fn repeated_opens_leave_no_anchors_behind() {
    let body = body();
    let before = anchor_count(&body);

    let prevent = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        event.prevent_default();
    });
    body.add_event_listener_with_callback("click", prevent.as_ref().unchecked_ref())
        .expect("listen for clicks");

    for _ in 0..3 {
        AnchorExternalUrlService
            .open_url("https://games.example.test/")
            .await
            .expect("open");
    }

    body.remove_event_listener_with_callback("click", prevent.as_ref().unchecked_ref())
        .expect("stop listening");
    assert_eq!(anchor_count(&body), before);
}
