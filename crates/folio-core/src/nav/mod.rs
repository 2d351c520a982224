//! Navigation bar state
//!
//! Active-link derivation plus the mobile menu and its scroll-lock side
//! effect. The lock has a single-writer contract: only the menu
//! handling here may set or clear it.

mod menu;
mod scroll_lock;

pub use menu::MobileMenu;
pub use scroll_lock::ScrollLock;

use crate::view::ViewId;

/// A link rendered in the bar and the mobile menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub view: ViewId,
}

const fn link(view: ViewId) -> NavLink {
    NavLink {
        label: view.label(),
        path: view.path(),
        view,
    }
}

/// The fixed link set, derived from the view identifiers
pub const NAV_LINKS: [NavLink; 3] = [
    link(ViewId::Home),
    link(ViewId::Projects),
    link(ViewId::Contact),
];

/// Navigation bar state machine
#[derive(Debug, Default)]
pub struct NavBar {
    menu: MobileMenu,
}

impl NavBar {
    /// Create a bar with the menu closed
    pub fn new() -> Self {
        Self::default()
    }

    /// The link set in display order
    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    /// A link is active iff its path equals the current path exactly
    /// (no prefix matching)
    pub fn is_active(&self, link: &NavLink, current_path: &str) -> bool {
        link.path == current_path
    }

    /// Mobile menu state
    #[inline]
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Flip the mobile menu and apply the matching scroll lock
    pub fn toggle_menu(&mut self, lock: &mut ScrollLock) {
        let open = self.menu.toggle();
        lock.set(open);
    }

    /// Close the mobile menu and release the scroll lock
    pub fn close_menu(&mut self, lock: &mut ScrollLock) {
        self.menu.close();
        lock.set(false);
    }

    /// A link inside the open menu was activated
    ///
    /// The caller performs the navigation; whether it does so before or
    /// after this call, the lock is released within the same event.
    pub fn menu_link_activated(&mut self, lock: &mut ScrollLock) {
        self.close_menu(lock);
    }
}
