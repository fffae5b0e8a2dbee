//! TON Connect widget bridge.
//!
//! Binds the global `TON_CONNECT_UI.TonConnectUI` class loaded by the page and
//! adapts it to [`WalletWidget`]. Only `wallet.account.address` is read from
//! the status callback.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Serialize;
use vtu_core::services::{StatusListener, WalletWidget};
use vtu_types::ConnectedWallet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = TON_CONNECT_UI, js_name = TonConnectUI)]
    type TonConnectUi;

    #[wasm_bindgen(constructor, catch, js_namespace = TON_CONNECT_UI, js_class = "TonConnectUI")]
    fn new(options: &JsValue) -> Result<TonConnectUi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = connectWallet)]
    fn connect_wallet(this: &TonConnectUi) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn disconnect(this: &TonConnectUi) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, js_name = onStatusChange)]
    fn on_status_change(this: &TonConnectUi, callback: &js_sys::Function) -> JsValue;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetOptions<'a> {
    manifest_url: &'a str,
}

/// Human-readable message from a thrown JS value.
pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return anyhow!(String::from(err.message()));
    }
    match value.as_string() {
        Some(msg) => anyhow!(msg),
        None => anyhow!("{value:?}"),
    }
}

pub struct TonConnectWallet {
    ui: TonConnectUi,
}

impl TonConnectWallet {
    pub fn new(manifest_url: &str) -> Result<Self> {
        let options = serde_wasm_bindgen::to_value(&WidgetOptions { manifest_url })
            .map_err(|e| anyhow!("widget options: {e}"))?;
        let ui = TonConnectUi::new(&options).map_err(js_error)?;
        Ok(Self { ui })
    }
}

#[async_trait(?Send)]
impl WalletWidget for TonConnectWallet {
    async fn connect(&self) -> Result<()> {
        let promise = self.ui.connect_wallet().map_err(js_error)?;
        JsFuture::from(promise).await.map_err(js_error)?;
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        let promise = self.ui.disconnect().map_err(js_error)?;
        JsFuture::from(promise).await.map_err(js_error)?;
        Ok(())
    }

    fn on_status_change(&self, listener: StatusListener) {
        let cb = Closure::<dyn Fn(JsValue)>::new(move |wallet: JsValue| {
            if wallet.is_null() || wallet.is_undefined() {
                listener(None);
                return;
            }
            match serde_wasm_bindgen::from_value::<ConnectedWallet>(wallet) {
                Ok(connected) => listener(Some(connected.account)),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring undecodable wallet object");
                }
            }
        });
        self.ui.on_status_change(cb.as_ref().unchecked_ref());
        cb.forget();
    }
}
