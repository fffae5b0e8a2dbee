//! Service form capture and submission.

use crate::dom;
use crate::notify;
use vtu_core::{Controller, Notice};
use vtu_types::{FormFields, ServiceKind};
use web_sys::HtmlFormElement;

/// Every `input`/`select` in the form, keyed by element id.
pub fn read_fields(form: &HtmlFormElement) -> FormFields {
    dom::query_all_within(form, "input, select")
        .into_iter()
        .filter_map(|el| {
            let id = el.id();
            if id.is_empty() {
                return None;
            }
            dom::control_value(&el).map(|value| (id, value))
        })
        .collect()
}

pub fn on_submit(controller: &Controller, kind: ServiceKind, form: &HtmlFormElement) {
    let fields = read_fields(form);
    if let Err(err) = controller.submit(kind, fields) {
        notify::show(&Notice::from(&err), controller.config().notification_duration());
    }
}
