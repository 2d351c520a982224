//! Mobile menu open/closed state

/// Mobile menu overlay state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Create a closed menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the menu is open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open/closed; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (idempotent)
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = MobileMenu::new();
        assert!(!menu.is_open());

        assert!(menu.toggle());
        assert!(menu.is_open());

        menu.close();
        assert!(!menu.is_open());

        // Closing again is a no-op.
        menu.close();
        assert!(!menu.is_open());
    }
}
