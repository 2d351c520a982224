//! Route table mapping URL paths to views
//!
//! The table is ordered and immutable after construction. Resolution
//! walks it top to bottom; the first matching entry wins, so explicit
//! entries must precede the wildcard.

use crate::view::ViewId;

/// How route keys are carried in the address bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressMode {
    /// Route key is the URL path segment. Deep links need the host to
    /// fall back to the app shell for unknown paths.
    Path,
    /// Route key lives after `#`. Works on any static host.
    Fragment,
}

/// What a matched pattern resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render this view
    View(ViewId),
    /// Commit this path instead and render its view
    Redirect(&'static str),
}

/// A single pattern-to-target mapping
///
/// `"*"` matches any path and must be the last entry if present.
#[derive(Clone, Copy, Debug)]
pub struct Route {
    pub pattern: &'static str,
    pub target: RouteTarget,
}

/// Result of resolving a path against the table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Path matched a view directly
    View(ViewId),
    /// Path is an alias or unknown; commit `to` and render `view`
    Redirect { to: &'static str, view: ViewId },
    /// No match and no redirect policy (path mode only)
    NotFound,
}

impl Resolution {
    /// The view this resolution renders, if any
    pub fn view(self) -> Option<ViewId> {
        match self {
            Resolution::View(view) | Resolution::Redirect { view, .. } => Some(view),
            Resolution::NotFound => None,
        }
    }
}

/// Ordered route table; first match wins
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    mode: AddressMode,
}

impl RouteTable {
    /// Path-based table: exact patterns only, unknown paths render nothing
    pub fn path_mode() -> Self {
        Self {
            routes: vec![
                Route { pattern: ViewId::Home.path(), target: RouteTarget::View(ViewId::Home) },
                Route { pattern: ViewId::Projects.path(), target: RouteTarget::View(ViewId::Projects) },
                Route { pattern: ViewId::Contact.path(), target: RouteTarget::View(ViewId::Contact) },
            ],
            mode: AddressMode::Path,
        }
    }

    /// Fragment-based table: `/home` aliases the root and any unknown
    /// path redirects to it
    pub fn fragment_mode() -> Self {
        Self {
            routes: vec![
                Route { pattern: ViewId::Home.path(), target: RouteTarget::View(ViewId::Home) },
                Route { pattern: ViewId::Projects.path(), target: RouteTarget::View(ViewId::Projects) },
                Route { pattern: ViewId::Contact.path(), target: RouteTarget::View(ViewId::Contact) },
                Route { pattern: "/home", target: RouteTarget::Redirect("/") },
                Route { pattern: "*", target: RouteTarget::Redirect("/") },
            ],
            mode: AddressMode::Fragment,
        }
    }

    /// The addressing mode this table was built for
    #[inline]
    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    /// The ordered route entries
    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a raw path to a view, redirect, or not-found
    ///
    /// Empty and malformed paths normalize to the root route; this
    /// never panics.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = normalize(path);

        for route in &self.routes {
            let matched = route.pattern == "*" || route.pattern == path;
            if !matched {
                continue;
            }
            return match route.target {
                RouteTarget::View(view) => Resolution::View(view),
                RouteTarget::Redirect(to) => match self.lookup_exact(to) {
                    Some(view) => Resolution::Redirect { to, view },
                    // Table construction keeps redirect targets resolvable;
                    // fall back to not-found rather than loop.
                    None => Resolution::NotFound,
                },
            };
        }

        Resolution::NotFound
    }

    /// Look up an exact (non-wildcard) pattern
    fn lookup_exact(&self, pattern: &str) -> Option<ViewId> {
        self.routes.iter().find_map(|route| match route.target {
            RouteTarget::View(view) if route.pattern == pattern => Some(view),
            _ => None,
        })
    }
}

/// Normalize a raw address-bar path for matching
///
/// Strips the fragment marker, query string, and trailing slash, and
/// guarantees a leading slash. Empty input becomes the root path.
pub fn normalize(path: &str) -> String {
    let mut path = path.trim();

    if let Some(stripped) = path.strip_prefix('#') {
        path = stripped;
    }
    if let Some(index) = path.find('?') {
        path = &path[..index];
    }

    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return "/".to_string();
    }
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes_resolve() {
        for table in [RouteTable::path_mode(), RouteTable::fragment_mode()] {
            assert_eq!(table.resolve("/"), Resolution::View(ViewId::Home));
            assert_eq!(table.resolve("/projects"), Resolution::View(ViewId::Projects));
            assert_eq!(table.resolve("/contact"), Resolution::View(ViewId::Contact));
        }
    }

    #[test]
    fn test_home_alias_redirects_to_root() {
        let table = RouteTable::fragment_mode();
        assert_eq!(
            table.resolve("/home"),
            Resolution::Redirect { to: "/", view: ViewId::Home }
        );
    }

    #[test]
    fn test_unknown_path_redirects_in_fragment_mode() {
        let table = RouteTable::fragment_mode();
        assert_eq!(
            table.resolve("/does-not-exist"),
            Resolution::Redirect { to: "/", view: ViewId::Home }
        );
        assert_eq!(
            table.resolve("/projects/nested"),
            Resolution::Redirect { to: "/", view: ViewId::Home }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found_in_path_mode() {
        let table = RouteTable::path_mode();
        assert_eq!(table.resolve("/does-not-exist"), Resolution::NotFound);
    }

    #[test]
    fn test_explicit_entries_win_over_wildcard() {
        let table = RouteTable::fragment_mode();
        // The wildcard is last; specific patterns must still match.
        assert_eq!(table.resolve("/contact"), Resolution::View(ViewId::Contact));
    }

    #[test]
    fn test_malformed_paths_normalize_to_root() {
        let table = RouteTable::fragment_mode();
        assert_eq!(table.resolve(""), Resolution::View(ViewId::Home));
        assert_eq!(table.resolve("   "), Resolution::View(ViewId::Home));
        assert_eq!(table.resolve("#"), Resolution::View(ViewId::Home));
        assert_eq!(table.resolve("//"), Resolution::View(ViewId::Home));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("#/projects"), "/projects");
        assert_eq!(normalize("/projects/"), "/projects");
        assert_eq!(normalize("projects"), "/projects");
        assert_eq!(normalize("/contact?from=nav"), "/contact");
    }

    #[test]
    fn test_trailing_slash_matches() {
        let table = RouteTable::fragment_mode();
        assert_eq!(table.resolve("/projects/"), Resolution::View(ViewId::Projects));
    }
}
