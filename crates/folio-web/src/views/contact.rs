//! Contact view: form fields, submit handoff, outcome banner
//!
//! The form state machine lives in `folio-core`; this module owns its
//! DOM, feeds input events in, and issues the mailto handoff through
//! `location.href`. The form is created on mount and dropped with the
//! view, so nothing survives navigation away.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::content::{CONTACT_DESCRIPTION, CONTACT_ERROR_MESSAGE, CONTACT_SUCCESS_MESSAGE};
use folio_core::{ContactForm, FormOutcome, HandoffError, MailHandoff};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{self, EventBinding};

/// Hands the composed mailto URL to the platform mail handler
struct LocationHandoff;

impl MailHandoff for LocationHandoff {
    fn open(&mut self, url: &str) -> Result<(), HandoffError> {
        let window = web_sys::window().ok_or(HandoffError)?;
        window.location().set_href(url).map_err(|_| HandoffError)
    }
}

/// Contact form DOM and its local state machine
pub struct ContactDom {
    root: Element,
    _bindings: Vec<EventBinding>,
}

impl ContactDom {
    /// Build the form inside `parent`
    pub fn build(document: &Document, parent: &Element) -> Result<Self, JsValue> {
        let form_state = Rc::new(RefCell::new(ContactForm::new()));
        let mut bindings = Vec::new();

        let root = dom::el(document, "div", "view contact")?;

        let title = dom::el(document, "h2", "")?;
        title.set_text_content(Some("Let's "));
        title.append_child(&dom::el_text(document, "span", "", "Connect")?.into())?;
        root.append_child(&title)?;

        root.append_child(&dom::el_text(
            document,
            "p",
            "view-description",
            CONTACT_DESCRIPTION,
        )?.into())?;

        let banner = dom::el(document, "div", "form-banner")?;
        root.append_child(&banner)?;

        let form = dom::el(document, "form", "contact-form")?;
        root.append_child(&form)?;

        let name_input = text_input(document, &form, "Name", "text", "Your Name")?;
        let email_input = text_input(document, &form, "Email", "email", "Your Email")?;
        let message_input = textarea(document, &form, "Message", "Your Message")?;

        // Field edits flow into the state machine (and clear a stale
        // outcome banner).
        {
            let state = form_state.clone();
            let input = name_input.clone();
            let banner = banner.clone();
            bindings.push(EventBinding::new(&name_input, "input", move |_| {
                state.borrow_mut().set_name(&input.value());
                update_banner(&banner, state.borrow().outcome());
            })?);
        }
        {
            let state = form_state.clone();
            let input = email_input.clone();
            let banner = banner.clone();
            bindings.push(EventBinding::new(&email_input, "input", move |_| {
                state.borrow_mut().set_email(&input.value());
                update_banner(&banner, state.borrow().outcome());
            })?);
        }
        {
            let state = form_state.clone();
            let input = message_input.clone();
            let banner = banner.clone();
            bindings.push(EventBinding::new(&message_input, "input", move |_| {
                state.borrow_mut().set_message(&input.value());
                update_banner(&banner, state.borrow().outcome());
            })?);
        }

        let button = dom::el_text(document, "button", "submit-button", "Send Message")?;
        button.set_attribute("type", "submit")?;
        button.set_attribute("data-hoverable", "")?;
        form.append_child(&button)?;

        {
            let state = form_state.clone();
            let banner = banner.clone();
            let name_input = name_input.clone();
            let email_input = email_input.clone();
            let message_input = message_input.clone();
            bindings.push(EventBinding::new(&form, "submit", move |event| {
                event.prevent_default();

                let mut form = state.borrow_mut();
                form.submit(&mut LocationHandoff);
                update_banner(&banner, form.outcome());

                // Success clears the machine's fields; mirror that into
                // the inputs. On error the entries stay put.
                if form.outcome() == FormOutcome::Success {
                    name_input.set_value(form.name());
                    email_input.set_value(form.email());
                    message_input.set_value(form.message());
                }
            })?);
        }

        parent.append_child(&root)?;
        Ok(Self {
            root,
            _bindings: bindings,
        })
    }

    /// Root element
    pub fn root(&self) -> &Element {
        &self.root
    }
}

impl Drop for ContactDom {
    fn drop(&mut self) {
        self.root.remove();
    }
}

/// Show, style, or hide the outcome banner
fn update_banner(banner: &Element, outcome: FormOutcome) {
    match outcome {
        FormOutcome::None => {
            banner.set_class_name("form-banner");
            banner.set_text_content(None);
        }
        FormOutcome::Success => {
            banner.set_class_name("form-banner success");
            banner.set_text_content(Some(CONTACT_SUCCESS_MESSAGE));
        }
        FormOutcome::Error => {
            banner.set_class_name("form-banner error");
            banner.set_text_content(Some(CONTACT_ERROR_MESSAGE));
        }
    }
}

/// Labeled single-line input inside a form group
fn text_input(
    document: &Document,
    form: &Element,
    label: &str,
    kind: &str,
    placeholder: &str,
) -> Result<HtmlInputElement, JsValue> {
    let group = dom::el(document, "div", "form-group")?;
    group.append_child(&dom::el_text(document, "label", "", label)?.into())?;

    let input: HtmlInputElement = document.create_element("input")?.unchecked_into();
    input.set_type(kind);
    input.set_placeholder(placeholder);
    input.set_required(true);
    input.set_attribute("data-hoverable", "")?;
    group.append_child(&input)?;

    form.append_child(&group)?;
    Ok(input)
}

/// Labeled textarea inside a form group
fn textarea(
    document: &Document,
    form: &Element,
    label: &str,
    placeholder: &str,
) -> Result<HtmlTextAreaElement, JsValue> {
    let group = dom::el(document, "div", "form-group")?;
    group.append_child(&dom::el_text(document, "label", "", label)?.into())?;

    let area: HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
    area.set_placeholder(placeholder);
    area.set_required(true);
    area.set_attribute("data-hoverable", "")?;
    group.append_child(&area)?;

    form.append_child(&group)?;
    Ok(area)
}
