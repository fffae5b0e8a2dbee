//! Transient notification banners.

use crate::dom;
use gloo_timers::callback::Timeout;
use std::time::Duration;
use vtu_core::{Notice, NoticeKind};
use wasm_bindgen::JsCast;

const BANNER_CSS: &str = "position: fixed; top: 20px; right: 20px; padding: 12px 24px; \
    border-radius: 8px; color: white; font-weight: 600; z-index: 10000; max-width: 300px; \
    box-shadow: 0 4px 12px rgba(0,0,0,0.3);";

fn background(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => "#ef4444",
        NoticeKind::Success => "#10b981",
        NoticeKind::Info => "#3b82f6",
    }
}

/// Append a banner to `<body>` and remove it after `lifetime`.
pub fn show(notice: &Notice, lifetime: Duration) {
    let doc = dom::document();
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(banner) = doc.create_element("div") else {
        return;
    };

    banner.set_class_name(&format!("notification notification-{}", notice.kind.as_str()));
    banner.set_text_content(Some(&notice.message));
    if let Some(html) = banner.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        style.set_css_text(BANNER_CSS);
        let _ = style.set_property("background-color", background(notice.kind));
    }
    if body.append_child(&banner).is_err() {
        return;
    }

    let millis = u32::try_from(lifetime.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || banner.remove()).forget();
}
