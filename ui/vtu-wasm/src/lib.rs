//! VTU Dashboard WASM Frontend
//!
//! Binds the dashboard markup to the `vtu-core` controller: wallet widget,
//! service forms, confirmation and status modals, transaction history.

pub mod assets;
pub mod dom;
pub mod events;
pub mod forms;
pub mod notify;
pub mod render;
pub mod runtime;
pub mod wallet;

use std::rc::Rc;
use vtu_core::services::{SimulatedBalance, SimulatedProcessor, WalletWidget};
use vtu_core::{Collaborators, Controller};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    gloo_console::log!("Initializing VTU Dashboard...");

    let config = assets::load_config().await;
    let els = dom::Elements::bind()?;

    let wallet = wallet::TonConnectWallet::new(&config.wallet_manifest_url)
        .map_err(|e| JsValue::from_str(&format!("wallet widget: {e:#}")))?;
    let wallet: Rc<dyn WalletWidget> = Rc::new(wallet);
    let delay = Rc::new(runtime::BrowserDelay);

    let controller = Controller::new(
        config.clone(),
        Collaborators {
            wallet: wallet.clone(),
            balance: Rc::new(SimulatedBalance::new(config.simulated_balance)),
            processor: Rc::new(SimulatedProcessor::new(delay.clone(), config.processing_delay())),
            delay,
            clock: Rc::new(runtime::BrowserClock),
        },
    );

    // Re-render on every state change
    {
        let els2 = els.clone();
        let c = controller.clone();
        controller.on_change(move || render::apply(&els2, &c.view()));
    }

    // Wallet status drives the session
    {
        let c = controller.clone();
        wallet.on_status_change(Box::new(move |account| {
            let c2 = c.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let notice = c2.handle_status_change(account).await;
                notify::show(&notice, c2.config().notification_duration());
            });
        }));
    }

    events::bind_events(&els, &controller)?;
    render::apply(&els, &controller.view());

    Ok(())
}
