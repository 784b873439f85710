//! Per-view page state.

use crate::layout::SectionLayout;
use crate::menu::MenuState;
use crate::section::SectionId;
use crate::tracker::ActiveSection;

/// Transient UI state owned by one mounted page view.
///
/// Created fresh on every mount: menu closed, `home` active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    menu: MenuState,
    active: ActiveSection,
}

impl PageState {
    /// State of a freshly mounted view
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the mobile drawer is open
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Section highlighted in navigation
    pub fn active(&self) -> SectionId {
        self.active.get()
    }

    /// Header menu/close button
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        tracing::debug!(open = self.menu.is_open(), "mobile menu toggled");
    }

    /// A link inside the mobile drawer was selected.
    ///
    /// Closes the drawer and returns the anchor to navigate to. The active
    /// section is left alone; only the scroll that follows moves it.
    pub fn select_menu_link(&mut self, section: SectionId) -> &'static str {
        self.menu.close();
        section.href()
    }

    /// Scroll event. Returns `true` when the active section changed.
    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, scroll_y: f64, layout: &L) -> bool {
        self.active.observe(scroll_y, layout)
    }
}
