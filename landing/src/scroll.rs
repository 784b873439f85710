//! Browser side of section tracking: window scroll events and DOM layout.

use landing_core::{ListenerHandle, ScrollCallback, ScrollSource, SectionBounds, SectionId, SectionLayout};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// `window` scroll events, reporting `window.scrollY`.
pub struct WindowScroll;

/// Installed `scroll` listener on `window`
pub struct WindowScrollHandle(WindowListenerHandle);

impl ScrollSource for WindowScroll {
    type Handle = WindowScrollHandle;

    fn subscribe(&self, callback: ScrollCallback) -> WindowScrollHandle {
        WindowScrollHandle(window_event_listener(ev::scroll, move |_| {
            callback(window().scroll_y().unwrap_or_default());
        }))
    }
}

impl ListenerHandle for WindowScrollHandle {
    fn release(self) {
        self.0.remove();
    }
}

/// Reads section bounds from the rendered elements on every lookup.
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let element = document()
            .get_element_by_id(section.id())?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}
