//! View identifiers

use serde::{Deserialize, Serialize};

/// Identifier for a top-level page view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Home,
    Projects,
    Contact,
}

impl ViewId {
    /// Canonical path for this view
    pub const fn path(self) -> &'static str {
        match self {
            ViewId::Home => "/",
            ViewId::Projects => "/projects",
            ViewId::Contact => "/contact",
        }
    }

    /// Display label used by the navigation bar
    pub const fn label(self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Projects => "Projects",
            ViewId::Contact => "Contact",
        }
    }
}
