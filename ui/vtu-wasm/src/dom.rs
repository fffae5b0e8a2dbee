//! DOM element bindings.
//!
//! Element ids and classes are the contract with the dashboard markup. All
//! fields are resolved once at startup; a missing element fails `bind()`.

use vtu_types::ServiceKind;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

fn collect(nl: web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

/// Value of a form control, whichever kind it is.
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

// ── Elements struct ──

/// All DOM element references used by the dashboard.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Wallet header
    pub connect_wallet: HtmlElement,
    pub disconnect_btn: HtmlElement,
    pub wallet_info: Element,
    pub wallet_address: Element,
    pub aqcnx_balance: Element,

    // Service tabs and forms
    pub tab_buttons: Vec<Element>,
    pub tab_contents: Vec<Element>,
    pub forms: Vec<(ServiceKind, HtmlFormElement)>,

    // Confirmation modal
    pub confirmation_modal: Element,
    pub confirm_service: Element,
    pub confirm_amount: Element,
    pub total_amount: Element,
    pub confirm_transaction: HtmlElement,

    // Status modal
    pub status_modal: Element,
    pub status_message: Element,
    pub status_icon: Element,

    // Modal chrome
    pub modals: Vec<Element>,
    pub close_buttons: Vec<Element>,

    // History
    pub transaction_history: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let mut forms = Vec::with_capacity(ServiceKind::ALL.len());
        for kind in ServiceKind::ALL {
            let form = by_id_typed::<HtmlFormElement>(kind.form_id())
                .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", kind.form_id())))?;
            forms.push((kind, form));
        }

        Ok(Elements {
            connect_wallet: get_html!("connect-wallet"),
            disconnect_btn: get_html!("disconnect-btn"),
            wallet_info: get_el!("wallet-info"),
            wallet_address: get_el!("wallet-address"),
            aqcnx_balance: get_el!("aqcnx-balance"),

            tab_buttons: query_all(".tab-btn"),
            tab_contents: query_all(".service-form"),
            forms,

            confirmation_modal: get_el!("confirmation-modal"),
            confirm_service: get_el!("confirm-service"),
            confirm_amount: get_el!("confirm-amount"),
            total_amount: get_el!("total-amount"),
            confirm_transaction: get_html!("confirm-transaction"),

            status_modal: get_el!("status-modal"),
            status_message: get_el!("status-message"),
            status_icon: get_el!("status-icon"),

            modals: query_all(".modal"),
            close_buttons: query_all(".close-btn, #cancel-transaction, #close-status-modal"),

            transaction_history: get_el!("transaction-history"),
        })
    }
}
