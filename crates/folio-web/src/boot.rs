//! Boot-time document setup
//!
//! Injects the theme variables, the app stylesheet, the `cursor: none`
//! override for the custom cursor, and the webfont link. Runs once
//! before the app mounts.

use folio_core::Theme;
use wasm_bindgen::prelude::*;

use crate::dom;

const STYLESHEET: &str = include_str!("style.css");

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500;700&display=swap";

/// Hide the native cursor so the custom indicators replace it; touch
/// layouts keep the platform cursor.
const CURSOR_OVERRIDE: &str = "\
* { cursor: none !important; }\n\
@media (max-width: 768px) { * { cursor: auto !important; } }\n";

/// Inject theme variables, stylesheet, cursor override, and fonts
pub fn inject_global_styles() -> Result<(), JsValue> {
    let document = dom::document()?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no document head"))?;

    let css = format!(
        "{}\n{}\n{}",
        Theme::DEFAULT.css_variables(),
        STYLESHEET,
        CURSOR_OVERRIDE
    );
    let style = document.create_element("style")?;
    style.set_text_content(Some(&css));
    head.append_child(&style)?;

    let link = document.create_element("link")?;
    link.set_attribute("rel", "stylesheet")?;
    link.set_attribute("href", FONTS_URL)?;
    head.append_child(&link)?;

    Ok(())
}
