//! Copies a [`DashboardView`] into the DOM.

use crate::dom::{self, Elements};
use vtu_core::DashboardView;

pub fn apply(els: &Elements, view: &DashboardView) {
    if view.connected {
        dom::set_display(&els.connect_wallet, "none");
        dom::remove_class(&els.wallet_info, "hidden");
    } else {
        dom::set_display(&els.connect_wallet, "block");
        dom::add_class(&els.wallet_info, "hidden");
    }
    dom::set_text(&els.wallet_address, &view.address_label);
    dom::set_text(&els.aqcnx_balance, &view.balance_label);
    dom::set_inner_html(&els.transaction_history, &view.history_html);

    match &view.confirmation {
        Some(summary) => {
            dom::set_text(&els.confirm_service, &summary.service_name);
            dom::set_text(&els.confirm_amount, &summary.amount_label);
            dom::set_text(&els.total_amount, &summary.total_label);
            dom::add_class(&els.confirmation_modal, "show");
        }
        None => dom::remove_class(&els.confirmation_modal, "show"),
    }

    match view.status {
        Some(status) => {
            dom::set_text(&els.status_message, status.message);
            dom::set_text(&els.status_icon, status.icon);
            dom::add_class(&els.status_modal, "show");
        }
        None => dom::remove_class(&els.status_modal, "show"),
    }
}

/// Activate the tab named `tab_name` and its `#{tab_name}-tab` content.
pub fn set_active_tab(els: &Elements, tab_name: &str) {
    for tab in &els.tab_buttons {
        dom::toggle_class(tab, "active", tab.get_attribute("data-tab").as_deref() == Some(tab_name));
    }
    let target = format!("{tab_name}-tab");
    for content in &els.tab_contents {
        dom::toggle_class(content, "active", content.id() == target);
    }
}
