//! Router: owns navigation state and notifies subscribers
//!
//! The router never touches the browser itself. The shell subscribes,
//! mirrors committed paths into the address bar, and feeds
//! browser-initiated changes (back/forward) back through [`Router::sync`].

use serde::Serialize;

use crate::route::{normalize, Resolution, RouteTable};
use crate::view::ViewId;

/// Committed navigation state
///
/// `active_view` is always the result of resolving `current_path`
/// through the route table, never set independently. `None` means the
/// path-mode table found no match (render nothing).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavigationState {
    pub current_path: String,
    pub active_view: Option<ViewId>,
}

/// Handle returned by [`Router::subscribe`]
pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&NavigationState)>;

/// Resolves paths against the route table and commits navigation
pub struct Router {
    table: RouteTable,
    state: NavigationState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl Router {
    /// Create a router starting at the root route
    pub fn new(table: RouteTable) -> Self {
        Self::with_initial_path(table, "/")
    }

    /// Create a router starting at `path` (e.g. the load-time address)
    pub fn with_initial_path(table: RouteTable, path: &str) -> Self {
        let state = commit(&table, path);
        Self {
            table,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The route table in use
    #[inline]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Current committed state
    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current committed path
    #[inline]
    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    /// View resolved from the current path, if any
    #[inline]
    pub fn active_view(&self) -> Option<ViewId> {
        self.state.active_view
    }

    /// Resolve a path without committing it
    pub fn resolve(&self, path: &str) -> Resolution {
        self.table.resolve(path)
    }

    /// Commit a navigation request and notify subscribers
    ///
    /// Redirects commit their target path, so a subscriber observing
    /// `current_path` never sees an alias or unknown path. Returns the
    /// committed state.
    pub fn navigate(&mut self, path: &str) -> &NavigationState {
        self.state = commit(&self.table, path);
        self.notify();
        &self.state
    }

    /// Commit a browser-initiated address change (back/forward)
    ///
    /// Same commit semantics as [`Router::navigate`]; the distinction
    /// matters only to the shell, which must not push a new history
    /// entry for these.
    pub fn sync(&mut self, path: &str) -> &NavigationState {
        self.navigate(path)
    }

    /// Register a listener; fired synchronously in registration order
    pub fn subscribe(&mut self, listener: impl FnMut(&NavigationState) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let snapshot = self.state.clone();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

/// Resolve `path` and produce the state that commits it
fn commit(table: &RouteTable, path: &str) -> NavigationState {
    match table.resolve(path) {
        Resolution::View(view) => NavigationState {
            current_path: normalize(path),
            active_view: Some(view),
        },
        Resolution::Redirect { to, view } => NavigationState {
            current_path: to.to_string(),
            active_view: Some(view),
        },
        Resolution::NotFound => NavigationState {
            current_path: normalize(path),
            active_view: None,
        },
    }
}
