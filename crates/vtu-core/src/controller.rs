//! Dashboard controller.
//!
//! Owns the [`AppState`] and drives it through the collaborators. State is
//! only ever borrowed between suspension points, never across an `.await`.
//! Change listeners fire after every mutation so the UI can re-render.

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::flow::FlowState;
use crate::notice::Notice;
use crate::services::{BalanceSource, Clock, Delay, Processor, WalletWidget};
use crate::state::AppState;
use crate::view::{self, ConfirmationSummary, DashboardView};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info, warn};
use vtu_types::{FormFields, ServiceKind, Transaction, WalletAccount};

type ChangeListener = Rc<dyn Fn()>;

/// Everything the controller talks to.
pub struct Collaborators {
    pub wallet: Rc<dyn WalletWidget>,
    pub balance: Rc<dyn BalanceSource>,
    pub processor: Rc<dyn Processor>,
    pub delay: Rc<dyn Delay>,
    pub clock: Rc<dyn Clock>,
}

struct Inner {
    config: DashboardConfig,
    state: RefCell<AppState>,
    services: Collaborators,
    listeners: RefCell<Vec<ChangeListener>>,
}

#[derive(Clone)]
pub struct Controller {
    inner: Rc<Inner>,
}

impl Controller {
    pub fn new(config: DashboardConfig, services: Collaborators) -> Self {
        let state = AppState::new(&config);
        Self {
            inner: Rc::new(Inner {
                config,
                state: RefCell::new(state),
                services,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    pub fn wallet(&self) -> Rc<dyn WalletWidget> {
        self.inner.services.wallet.clone()
    }

    /// Read access to the state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        f(&self.inner.state.borrow())
    }

    fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let out = f(&mut self.inner.state.borrow_mut());
        self.notify_changed();
        out
    }

    pub fn view(&self) -> DashboardView {
        self.with_state(view::render)
    }

    /// Register a callback run after every state change.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn() + 'static,
    {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify_changed(&self) {
        let listeners: Vec<ChangeListener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    // ── Wallet ──

    /// Ask the widget to connect. The session itself is opened by
    /// [`handle_status_change`](Self::handle_status_change).
    pub async fn connect(&self) -> Result<()> {
        info!("connecting wallet");
        self.inner.services.wallet.connect().await.map_err(|err| {
            error!(error = %err, "wallet connect failed");
            DashboardError::Connection(format!("{err:#}"))
        })
    }

    /// Ask the widget to disconnect. Failures are only logged.
    pub async fn disconnect(&self) {
        info!("disconnecting wallet");
        if let Err(err) = self.inner.services.wallet.disconnect().await {
            warn!(error = %err, "wallet disconnect failed");
        }
    }

    /// React to the widget's status callback.
    pub async fn handle_status_change(&self, wallet: Option<WalletAccount>) -> Notice {
        let Some(account) = wallet else {
            self.with_state_mut(AppState::close_session);
            return Notice::info("Wallet disconnected");
        };

        let address = account.address.clone();
        self.with_state_mut(|state| state.open_session(account));

        let balance = match self.inner.services.balance.fetch_balance(&address).await {
            Ok(balance) => balance,
            Err(err) => {
                error!(error = %err, "balance fetch failed");
                0
            }
        };
        self.with_state_mut(|state| state.apply_balance(&address, balance));

        Notice::success("Wallet connected successfully!")
    }

    // ── Purchase flow ──

    /// Validate a form and, if it passes, open the confirmation step.
    pub fn submit(&self, kind: ServiceKind, fields: FormFields) -> Result<ConfirmationSummary> {
        let symbol = self.inner.config.token_symbol.clone();
        self.with_state_mut(|state| {
            state.submit(kind, fields)?;
            view::confirmation_summary(state.flow(), &symbol).ok_or(DashboardError::NothingToConfirm)
        })
    }

    pub fn cancel(&self) {
        self.with_state_mut(AppState::cancel);
    }

    /// Confirm the pending purchase and process it to completion.
    pub async fn confirm(&self) -> Result<Transaction> {
        let purchase = self.with_state_mut(AppState::confirm)?;

        let outcome = self
            .inner
            .services
            .processor
            .process(&purchase)
            .await
            .map_err(|err| format!("{err:#}"));

        let now = self.inner.services.clock.now_epoch_ms();
        self.with_state_mut(|state| state.complete(outcome, now))
    }

    /// Hide the success status after the configured delay, unless the flow
    /// has moved on in the meantime.
    pub async fn auto_dismiss(&self, tx_id: u64) {
        self.inner
            .services
            .delay
            .sleep(self.inner.config.status_dismiss_delay())
            .await;

        let still_showing = self.with_state(
            |state| matches!(state.flow(), FlowState::Completed(tx) if tx.id == tx_id),
        );
        if still_showing {
            self.dismiss();
        }
    }

    /// Close the status display of a finished flow.
    pub fn dismiss(&self) {
        self.with_state_mut(AppState::dismiss);
    }
}
