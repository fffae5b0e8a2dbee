//! Static asset loading.
//!
//! The dashboard has no backend; the only fetch is the optional
//! `config/dashboard.json` sitting next to the page.

use crate::wallet::js_error;
use anyhow::{Context, Result, anyhow, bail};
use vtu_core::DashboardConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

pub const CONFIG_URL: &str = "config/dashboard.json";

/// Body of the config file, or `None` when the page ships without one.
async fn fetch_config_body() -> Result<Option<String>> {
    let request = Request::new_with_str(CONFIG_URL)
        .map_err(js_error)
        .context("building config request")?;

    let resp: Response = JsFuture::from(gloo_utils::window().fetch_with_request(&request))
        .await
        .map_err(js_error)
        .context("fetching dashboard config")?
        .dyn_into()
        .map_err(|_| anyhow!("fetch resolved to a non-Response value"))?;

    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        bail!("config fetch returned {} {}", resp.status(), resp.status_text());
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)
        .context("reading config body")?;
    Ok(body.as_string())
}

/// Settings from an optional config body; defaults when absent or invalid.
pub fn config_from_body(body: Option<&str>) -> DashboardConfig {
    let Some(raw) = body else {
        tracing::debug!("no dashboard config, using defaults");
        return DashboardConfig::default();
    };
    DashboardConfig::from_json(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid dashboard config, using defaults");
        DashboardConfig::default()
    })
}

/// Load dashboard settings, falling back to defaults on any failure.
pub async fn load_config() -> DashboardConfig {
    match fetch_config_body().await {
        Ok(body) => config_from_body(body.as_deref()),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "dashboard config unavailable, using defaults");
            DashboardConfig::default()
        }
    }
}
