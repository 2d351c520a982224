//! Browser shell for the portfolio single-page app
//!
//! This crate runs in the browser's main thread. It mounts the DOM,
//! wires pointer/click/address events into the `folio-core` state
//! machines, and renders their state back out every animation frame.

mod address;
mod app;
mod boot;
mod cursor;
mod dom;
mod navbar;
mod views;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub use address::Address;
pub use app::App;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    /// Current timestamp in milliseconds
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

pub(crate) fn console_log(message: &str) {
    log(&format!("[folio-web] {message}"));
}

pub(crate) fn now_ms() -> f64 {
    date_now()
}

thread_local! {
    /// Keeps the auto-mounted app (and its listeners) alive
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Entry point: mount the app with fragment-based routing
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    boot::inject_global_styles()?;

    let app = App::mount(Address::fragment())?;
    app::run_frame_loop(app.clone());
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    console_log("mounted");
    Ok(())
}

/// JS-facing controller around the mounted app
///
/// `start` already mounts the fragment-routed app; this facade exists
/// for hosts that need the path-based variant or programmatic control.
#[wasm_bindgen]
pub struct PortfolioApp {
    app: Rc<App>,
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Mount with fragment-based routing (no host configuration needed)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PortfolioApp, JsValue> {
        let app = App::mount(Address::fragment())?;
        app::run_frame_loop(app.clone());
        Ok(Self { app })
    }

    /// Mount with path-based routing under a host base path
    pub fn with_base_path(base: &str) -> Result<PortfolioApp, JsValue> {
        let app = App::mount(Address::path(base))?;
        app::run_frame_loop(app.clone());
        Ok(Self { app })
    }

    /// Programmatic navigation
    pub fn navigate(&self, path: &str) {
        self.app.navigate(path);
    }

    /// The committed path
    pub fn current_path(&self) -> String {
        self.app.current_path()
    }

    /// Committed navigation state as JSON
    pub fn navigation_json(&self) -> String {
        self.app.navigation_json()
    }
}
