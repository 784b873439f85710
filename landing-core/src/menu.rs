//! Mobile navigation drawer state.

/// Open/closed state of the mobile menu. Closed on mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the drawer is rendered
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer (header menu/close button)
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the drawer. Links inside the drawer call this on selection.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
