//! Core state machines for the portfolio single-page app
//!
//! Everything here is pure and natively testable: routing, view
//! transitions, cursor tracking, navigation-bar state, and the contact
//! form. The browser shell (`folio-web`) renders these states to the
//! DOM and feeds pointer/click/address events back in.

pub mod contact;
pub mod content;
pub mod cursor;
pub mod nav;
pub mod route;
pub mod router;
pub mod theme;
pub mod transition;
mod view;

pub use contact::{ContactForm, FormOutcome, HandoffError, MailHandoff};
pub use content::{Project, Rotation, SocialLink, PROJECTS, SOCIAL_LINKS};
pub use cursor::{CursorState, CursorTracker, Follower, Spring};
pub use nav::{MobileMenu, NavBar, NavLink, ScrollLock, NAV_LINKS};
pub use route::{AddressMode, Resolution, Route, RouteTable, RouteTarget};
pub use router::{NavigationState, Router, SubscriptionId};
pub use theme::Theme;
pub use transition::{Fade, FadeDirection, Phase, TransitionController, FADE_DURATION_MS};
pub use view::ViewId;
