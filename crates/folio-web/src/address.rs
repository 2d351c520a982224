//! Address-bar integration
//!
//! Two variants: fragment-based (route key after `#`, works on any
//! static host) and path-based (route key is the path, needs the host
//! to fall back to the app shell; see `tools/dev-server`).

use wasm_bindgen::JsValue;

/// How the shell reads and writes the address bar
pub enum Address {
    Fragment,
    Path { base: String },
}

impl Address {
    /// Fragment-based addressing (canonical)
    pub fn fragment() -> Self {
        Address::Fragment
    }

    /// Path-based addressing under a host base path (e.g.
    /// `/Portfolio-Site`)
    pub fn path(base: &str) -> Self {
        Address::Path {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// The event the browser fires when this address changes behind
    /// the app's back
    pub fn change_event(&self) -> &'static str {
        match self {
            Address::Fragment => "hashchange",
            Address::Path { .. } => "popstate",
        }
    }

    /// Read the current route path from the address bar
    ///
    /// Returns the raw value; route normalization happens in the core
    /// table. A missing window degrades to the root path.
    pub fn read(&self) -> String {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return "/".to_string(),
        };
        let location = window.location();

        match self {
            Address::Fragment => location.hash().unwrap_or_default(),
            Address::Path { base } => {
                let path = location.pathname().unwrap_or_else(|_| "/".to_string());
                match path.strip_prefix(base.as_str()) {
                    Some(stripped) if !base.is_empty() => stripped.to_string(),
                    _ => path,
                }
            }
        }
    }

    /// Mirror a committed path into the address bar without reloading
    pub fn write(&self, path: &str) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };

        match self {
            Address::Fragment => {
                let location = window.location();
                let target = format!("#{path}");
                // Setting an identical hash would still scroll; skip it.
                if location.hash().unwrap_or_default() != target {
                    let _ = location.set_hash(&target);
                }
            }
            Address::Path { base } => {
                if let Ok(history) = window.history() {
                    let full = format!("{base}{path}");
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&full));
                }
            }
        }
    }
}
