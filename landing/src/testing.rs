//! Browser test helpers: mount a view into a fresh container and let
//! reactive updates land before asserting on the DOM.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// A mounted view. The DOM stays up until this is dropped.
pub struct Mounted<H> {
    pub root: HtmlElement,
    _handle: H,
}

impl<H> Mounted<H> {
    pub fn find(&self, selector: &str) -> Option<HtmlElement> {
        self.root
            .query_selector(selector)
            .expect("valid selector")
            .map(|element| element.unchecked_into::<HtmlElement>())
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.root
            .query_selector_all(selector)
            .expect("valid selector")
            .length()
    }

    pub fn click(&self, selector: &str) {
        self.find(selector)
            .unwrap_or_else(|| panic!("nothing matches {selector}"))
            .click();
    }
}

pub fn mount<F, N>(view: F) -> Mounted<impl Sized>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let root = document()
        .create_element("div")
        .expect("create container")
        .unchecked_into::<HtmlElement>();
    document()
        .body()
        .expect("document body")
        .append_child(&root)
        .expect("attach container");
    let handle = mount_to(root.clone(), view);
    Mounted { root, _handle: handle }
}

/// Yield to the executor so queued render effects run.
pub async fn settle() {
    for _ in 0..3 {
        leptos::task::tick().await;
    }
}
