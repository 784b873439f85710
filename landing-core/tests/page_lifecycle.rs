//! Mount, scroll, menu and teardown of a page view against an in-memory viewport.

use std::cell::RefCell;
use std::rc::Rc;

use landing_core::{
    ListenerHandle, PageState, ScrollCallback, ScrollSource, SectionId, SectionLayout, StaticLayout,
    Subscription,
};

type Listeners = Rc<RefCell<Vec<Option<Rc<dyn Fn(f64)>>>>>;

#[derive(Clone, Default)]
struct Viewport {
    listeners: Listeners,
}

struct Handle {
    slot: usize,
    listeners: Listeners,
}

impl Viewport {
    fn scroll_to(&self, y: f64) {
        let live: Vec<_> = self.listeners.borrow().iter().flatten().cloned().collect();
        for cb in live {
            cb(y);
        }
    }

    fn live_listeners(&self) -> usize {
        self.listeners.borrow().iter().flatten().count()
    }
}

impl ScrollSource for Viewport {
    type Handle = Handle;

    fn subscribe(&self, callback: ScrollCallback) -> Handle {
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(Some(Rc::from(callback)));
        Handle {
            slot: listeners.len() - 1,
            listeners: self.listeners.clone(),
        }
    }
}

impl ListenerHandle for Handle {
    fn release(self) {
        self.listeners.borrow_mut()[self.slot] = None;
    }
}

/// A mounted page view: its own state plus the scroll listener writing to it.
struct MountedPage {
    state: Rc<RefCell<PageState>>,
    scroll: Subscription<Handle>,
}

impl MountedPage {
    fn mount(viewport: &Viewport, layout: impl SectionLayout + 'static) -> Self {
        let state = Rc::new(RefCell::new(PageState::new()));
        let sink = state.clone();
        let scroll = Subscription::attach(viewport, move |y| {
            sink.borrow_mut().on_scroll(y, &layout);
        });
        Self { state, scroll }
    }

    fn state(&self) -> PageState {
        *self.state.borrow()
    }

    fn unmount(self) -> Rc<RefCell<PageState>> {
        self.scroll.release();
        self.state
    }
}

fn layout() -> StaticLayout {
    // hero, stats+about (untracked), verticals, products, gallery, contact
    let mut layout = StaticLayout::stacked(&[(SectionId::Home, 720.0)]);
    let mut top = 720.0 + 1400.0;
    for (section, height) in [
        (SectionId::Companies, 1900.0),
        (SectionId::Products, 1600.0),
        (SectionId::Gallery, 900.0),
        (SectionId::Contact, 1100.0),
    ] {
        layout.insert(section, landing_core::SectionBounds::new(top, height));
        top += height;
    }
    layout
}

#[test]
fn end_to_end_scroll_and_menu() {
    let viewport = Viewport::default();
    let layout = layout();
    let companies_top = layout.bounds(SectionId::Companies).unwrap().top;
    let page = MountedPage::mount(&viewport, layout);

    viewport.scroll_to(0.0);
    assert_eq!(page.state().active(), SectionId::Home);

    viewport.scroll_to(companies_top - 100.0);
    assert_eq!(page.state().active(), SectionId::Companies);

    page.state.borrow_mut().toggle_menu();
    assert!(page.state().menu_open());

    let href = page.state.borrow_mut().select_menu_link(SectionId::Products);
    assert_eq!(href, "#products");
    assert!(!page.state().menu_open());
    assert_eq!(page.state().active(), SectionId::Companies);

    let products_top = companies_top + 1900.0;
    viewport.scroll_to(products_top - 100.0);
    assert_eq!(page.state().active(), SectionId::Products);
}

#[test]
fn about_block_keeps_previous_highlight() {
    let viewport = Viewport::default();
    let page = MountedPage::mount(&viewport, layout());

    viewport.scroll_to(1000.0);
    assert_eq!(page.state().active(), SectionId::Home);

    viewport.scroll_to(6000.0);
    assert_eq!(page.state().active(), SectionId::Gallery);

    viewport.scroll_to(-200.0);
    assert_eq!(page.state().active(), SectionId::Gallery);
}

#[test]
fn no_updates_after_unmount() {
    let viewport = Viewport::default();
    let page = MountedPage::mount(&viewport, layout());
    assert_eq!(viewport.live_listeners(), 1);

    let state = page.unmount();
    assert_eq!(viewport.live_listeners(), 0);

    viewport.scroll_to(5000.0);
    assert_eq!(state.borrow().active(), SectionId::Home);
}

#[test]
fn dropping_the_view_releases_the_listener() {
    let viewport = Viewport::default();
    drop(MountedPage::mount(&viewport, layout()));
    assert_eq!(viewport.live_listeners(), 0);
    viewport.scroll_to(3000.0);
}

#[test]
fn remount_starts_fresh_with_a_single_listener() {
    let viewport = Viewport::default();

    let first = MountedPage::mount(&viewport, layout());
    viewport.scroll_to(5000.0);
    first.state.borrow_mut().toggle_menu();
    first.unmount();

    let second = MountedPage::mount(&viewport, layout());
    assert_eq!(viewport.live_listeners(), 1);
    assert_eq!(second.state(), PageState::new());
}
