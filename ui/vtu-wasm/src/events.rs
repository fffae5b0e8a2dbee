//! Event binding.
//!
//! Wires all UI event listeners to the controller. Async handlers are
//! spawned via `wasm_bindgen_futures::spawn_local`.

use crate::dom::Elements;
use crate::forms;
use crate::notify;
use crate::render;
use vtu_core::{Controller, DashboardError, Notice};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Helper: attach a click handler that owns a controller clone.
macro_rules! on_click {
    ($el:expr, $controller:expr, $handler:expr) => {{
        let controller = $controller.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            $handler(&controller, e);
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements, controller: &Controller) -> Result<(), JsValue> {
    // ── Wallet ──
    on_click!(els.connect_wallet, controller, |c: &Controller, _| {
        let c = c.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = c.connect().await {
                notify::show(&Notice::from(&err), c.config().notification_duration());
            }
        });
    });
    on_click!(els.disconnect_btn, controller, |c: &Controller, _| {
        let c = c.clone();
        wasm_bindgen_futures::spawn_local(async move {
            c.disconnect().await;
        });
    });

    // ── Tabs ──
    for tab in &els.tab_buttons {
        let tab_name = tab.get_attribute("data-tab").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            render::set_active_tab(&els2, &tab_name);
        }) as Box<dyn FnMut(_)>);
        tab.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Service forms ──
    for (kind, form) in &els.forms {
        let kind = *kind;
        let form2 = form.clone();
        let c = controller.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            forms::on_submit(&c, kind, &form2);
        }) as Box<dyn FnMut(_)>);
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Confirmation ──
    on_click!(els.confirm_transaction, controller, |c: &Controller, _| {
        let c = c.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match c.confirm().await {
                Ok(tx) => c.auto_dismiss(tx.id).await,
                // shown in the status modal
                Err(DashboardError::Processing(_)) => {}
                Err(err) => notify::show(&Notice::from(&err), c.config().notification_duration()),
            }
        });
    });

    // ── Modal close buttons and backdrops ──
    for btn in &els.close_buttons {
        on_click!(btn, controller, |c: &Controller, e: web_sys::MouseEvent| {
            let modal = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".modal").ok().flatten());
            if let Some(modal) = modal {
                close_modal(c, &modal);
            }
        });
    }
    for modal in &els.modals {
        let modal2 = modal.clone();
        on_click!(modal, controller, |c: &Controller, e: web_sys::MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|target| target == modal2);
            if on_backdrop {
                close_modal(c, &modal2);
            }
        });
    }

    Ok(())
}

/// Close a modal, keeping the flow state in step with what is on screen.
fn close_modal(controller: &Controller, modal: &Element) {
    match modal.id().as_str() {
        "confirmation-modal" => controller.cancel(),
        "status-modal" => controller.dismiss(),
        _ => {}
    }
    crate::dom::remove_class(modal, "show");
}
