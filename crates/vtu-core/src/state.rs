//! Application state and its transitions.
//!
//! `AppState` is owned by the [`Controller`](crate::Controller); nothing here
//! awaits, so every transition runs to completion under a single borrow.

use crate::amount;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::flow::{FlowState, PendingPurchase, PurchaseRequest};
use crate::history::TransactionHistory;
use tracing::{debug, info, warn};
use vtu_types::{FormFields, ServiceKind, Transaction, TransactionStatus, WalletAccount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    session: Option<WalletSession>,
    balance: u64,
    history: TransactionHistory,
    flow: FlowState,
    token_symbol: String,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            session: None,
            balance: 0,
            history: TransactionHistory::with_capacity(config.history_capacity),
            flow: FlowState::Idle,
            token_symbol: config.token_symbol.clone(),
        }
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn token_symbol(&self) -> &str {
        &self.token_symbol
    }

    // ── Wallet session ──

    pub fn open_session(&mut self, account: WalletAccount) {
        info!(address = %account.address, "wallet session opened");
        self.session = Some(WalletSession {
            address: account.address,
        });
    }

    /// Store a fetched balance, provided the session it was fetched for is
    /// still the active one.
    pub fn apply_balance(&mut self, address: &str, balance: u64) -> bool {
        match &self.session {
            Some(session) if session.address == address => {
                debug!(balance, "balance updated");
                self.balance = balance;
                true
            }
            _ => {
                warn!(%address, "discarding balance for inactive session");
                false
            }
        }
    }

    /// Drop the session and zero the balance. A pending confirmation is
    /// abandoned; an in-flight purchase finishes and fails on completion.
    pub fn close_session(&mut self) {
        info!("wallet session closed");
        self.session = None;
        self.balance = 0;
        if matches!(self.flow, FlowState::ConfirmationPending(_)) || self.flow.is_terminal() {
            self.flow = FlowState::Idle;
        }
    }

    // ── Purchase flow ──

    /// Validate a submitted form. On success the flow waits for confirmation;
    /// on failure it is left `Rejected` with the returned error.
    pub fn submit(&mut self, kind: ServiceKind, fields: FormFields) -> Result<PendingPurchase> {
        if self.flow.is_in_flight() {
            warn!(service = %kind, "submission refused while a transaction is processing");
            return Err(DashboardError::TransactionInFlight);
        }

        let request = PurchaseRequest { kind, fields };
        self.flow = FlowState::FormSubmitted(request.clone());

        match self.validate(request) {
            Ok(purchase) => {
                info!(service = %purchase.kind, amount = purchase.amount, "awaiting confirmation");
                self.flow = FlowState::ConfirmationPending(purchase.clone());
                Ok(purchase)
            }
            Err(err) => {
                info!(service = %kind, error = %err, "submission rejected");
                self.flow = FlowState::Rejected(err.clone());
                Err(err)
            }
        }
    }

    fn validate(&self, request: PurchaseRequest) -> Result<PendingPurchase> {
        if self.session.is_none() {
            return Err(DashboardError::NotConnected);
        }

        let required = amount::required_amount(request.kind, &request.fields);
        if self.balance < required {
            return Err(DashboardError::InsufficientBalance {
                symbol: self.token_symbol.clone(),
                required,
                available: self.balance,
            });
        }

        Ok(PendingPurchase {
            kind: request.kind,
            amount: required,
            fields: request.fields,
        })
    }

    /// Abandon a pending confirmation.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.flow, FlowState::ConfirmationPending(_)) {
            debug!("confirmation cancelled");
            self.flow = FlowState::Idle;
            true
        } else {
            false
        }
    }

    /// Confirm the pending purchase and start processing it.
    pub fn confirm(&mut self) -> Result<PendingPurchase> {
        match std::mem::take(&mut self.flow) {
            FlowState::ConfirmationPending(purchase) => {
                info!(service = %purchase.kind, amount = purchase.amount, "processing purchase");
                self.flow = FlowState::Processing(purchase.clone());
                Ok(purchase)
            }
            in_flight @ FlowState::Processing(_) => {
                self.flow = in_flight;
                Err(DashboardError::TransactionInFlight)
            }
            other => {
                self.flow = other;
                Err(DashboardError::NothingToConfirm)
            }
        }
    }

    /// Finish the in-flight purchase with the processor's outcome.
    ///
    /// Success deducts the amount and records a `success` transaction.
    /// Any failure records a `failed` transaction and leaves the balance alone.
    pub fn complete(
        &mut self,
        outcome: std::result::Result<(), String>,
        now_epoch_ms: u64,
    ) -> Result<Transaction> {
        let purchase = match std::mem::take(&mut self.flow) {
            FlowState::Processing(purchase) => purchase,
            other => {
                self.flow = other;
                return Err(DashboardError::NothingToConfirm);
            }
        };

        let settled = outcome.and_then(|()| {
            if self.session.is_none() {
                return Err("wallet disconnected during processing".to_owned());
            }
            self.balance
                .checked_sub(purchase.amount)
                .ok_or_else(|| "balance no longer covers the purchase".to_owned())
        });

        match settled {
            Ok(remaining) => {
                self.balance = remaining;
                let tx = self.record(&purchase, TransactionStatus::Success, now_epoch_ms);
                info!(id = tx.id, amount = tx.amount, balance = remaining, "purchase completed");
                self.flow = FlowState::Completed(tx.clone());
                Ok(tx)
            }
            Err(cause) => {
                let tx = self.record(&purchase, TransactionStatus::Failed, now_epoch_ms);
                warn!(id = tx.id, %cause, "purchase failed");
                let error = DashboardError::Processing(cause);
                self.flow = FlowState::Failed {
                    purchase,
                    error: error.clone(),
                };
                Err(error)
            }
        }
    }

    fn record(&mut self, purchase: &PendingPurchase, status: TransactionStatus, now: u64) -> Transaction {
        let tx = Transaction {
            id: now,
            service: purchase.kind,
            service_name: purchase.service_name().to_owned(),
            amount: purchase.amount,
            status,
            timestamp_epoch_ms: now,
            details: purchase.fields.clone(),
        };
        if let Some(evicted) = self.history.record(tx.clone()) {
            debug!(id = evicted.id, "evicted oldest transaction");
        }
        tx
    }

    /// Clear a finished flow so the status display goes away.
    pub fn dismiss(&mut self) -> bool {
        if self.flow.is_terminal() {
            self.flow = FlowState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(balance: u64) -> AppState {
        let mut state = AppState::new(&DashboardConfig::default());
        state.open_session(WalletAccount {
            address: "EQD4FPq-pLJxzR1Ht0vTNRbCJyxZr7UuBx0Q4FBtxyz1234".to_owned(),
        });
        assert!(state.apply_balance("EQD4FPq-pLJxzR1Ht0vTNRbCJyxZr7UuBx0Q4FBtxyz1234", balance));
        state
    }

    fn airtime(amount: &str) -> FormFields {
        FormFields::from([
            ("airtime-network".to_owned(), "mtn".to_owned()),
            ("airtime-phone".to_owned(), "08031234567".to_owned()),
            ("airtime-amount".to_owned(), amount.to_owned()),
        ])
    }

    #[test]
    fn submission_without_session_rejects_before_balance_check() {
        let mut state = AppState::new(&DashboardConfig::default());
        let err = state.submit(ServiceKind::Airtime, airtime("999999")).unwrap_err();
        assert_eq!(err, DashboardError::NotConnected);
        assert_eq!(state.flow(), &FlowState::Rejected(DashboardError::NotConnected));
    }

    #[test]
    fn insufficient_balance_reports_exact_values() {
        let mut state = connected(300);
        let err = state.submit(ServiceKind::Airtime, airtime("450")).unwrap_err();
        assert_eq!(
            err,
            DashboardError::InsufficientBalance {
                symbol: "AQCNX".to_owned(),
                required: 450,
                available: 300,
            }
        );
        assert!(err.to_string().contains("Required: 450, Available: 300"));
    }

    #[test]
    fn exact_balance_is_enough() -> Result<()> {
        let mut state = connected(450);
        let purchase = state.submit(ServiceKind::Airtime, airtime("450"))?;
        assert_eq!(purchase.amount, 450);
        assert_eq!(state.flow().pending_confirmation(), Some(&purchase));
        Ok(())
    }

    #[test]
    fn blank_amount_reaches_confirmation_as_zero() -> Result<()> {
        let mut state = connected(0);
        let purchase = state.submit(ServiceKind::Airtime, airtime(""))?;
        assert_eq!(purchase.amount, 0);
        assert_eq!(state.flow().pending_confirmation(), Some(&purchase));
        Ok(())
    }

    #[test]
    fn successful_completion_deducts_and_records() -> Result<()> {
        let mut state = connected(1000);
        state.submit(ServiceKind::Airtime, airtime("500"))?;
        state.confirm()?;
        assert!(state.flow().is_in_flight());

        let tx = state.complete(Ok(()), 1_700_000_000_000)?;
        assert_eq!(state.balance(), 500);
        assert_eq!(tx.status, TransactionStatus::Success);
        assert_eq!(state.history().latest(), Some(&tx));
        assert_eq!(tx.details.get("airtime-phone").map(String::as_str), Some("08031234567"));
        Ok(())
    }

    #[test]
    fn processor_failure_leaves_balance_untouched() -> Result<()> {
        let mut state = connected(1000);
        state.submit(ServiceKind::Airtime, airtime("500"))?;
        state.confirm()?;

        let err = state.complete(Err("network hiccup".to_owned()), 42).unwrap_err();
        assert_eq!(err, DashboardError::Processing("network hiccup".to_owned()));
        assert_eq!(state.balance(), 1000);
        assert_eq!(state.history().latest().map(|t| t.status), Some(TransactionStatus::Failed));
        assert!(matches!(state.flow(), FlowState::Failed { .. }));
        Ok(())
    }

    #[test]
    fn in_flight_gate_blocks_new_submissions() -> Result<()> {
        let mut state = connected(1000);
        state.submit(ServiceKind::Airtime, airtime("100"))?;
        state.confirm()?;

        let err = state.submit(ServiceKind::Airtime, airtime("100")).unwrap_err();
        assert_eq!(err, DashboardError::TransactionInFlight);
        assert_eq!(state.confirm().unwrap_err(), DashboardError::TransactionInFlight);
        assert!(state.flow().is_in_flight());
        Ok(())
    }

    #[test]
    fn confirm_without_pending_purchase_is_refused() {
        let mut state = connected(1000);
        assert_eq!(state.confirm().unwrap_err(), DashboardError::NothingToConfirm);
        assert_eq!(state.flow(), &FlowState::Idle);
    }

    #[test]
    fn disconnect_during_processing_fails_completion() -> Result<()> {
        let mut state = connected(1000);
        state.submit(ServiceKind::Airtime, airtime("500"))?;
        state.confirm()?;
        state.close_session();
        assert!(state.flow().is_in_flight());

        let err = state.complete(Ok(()), 7).unwrap_err();
        assert!(matches!(err, DashboardError::Processing(_)));
        assert_eq!(state.balance(), 0);
        Ok(())
    }

    #[test]
    fn close_session_resets_balance_and_pending_confirmation() -> Result<()> {
        let mut state = connected(8000);
        state.submit(ServiceKind::Airtime, airtime("500"))?;
        state.close_session();
        assert_eq!(state.balance(), 0);
        assert!(!state.is_connected());
        assert_eq!(state.flow(), &FlowState::Idle);
        Ok(())
    }

    #[test]
    fn stale_balance_is_discarded() {
        let mut state = AppState::new(&DashboardConfig::default());
        assert!(!state.apply_balance("EQ-old", 900));
        assert_eq!(state.balance(), 0);
    }

    #[test]
    fn cancel_and_dismiss_return_to_idle() -> Result<()> {
        let mut state = connected(1000);
        state.submit(ServiceKind::Airtime, airtime("10"))?;
        assert!(state.cancel());
        assert_eq!(state.flow(), &FlowState::Idle);

        state.submit(ServiceKind::Airtime, airtime("10"))?;
        state.confirm()?;
        assert!(!state.dismiss());
        state.complete(Ok(()), 1)?;
        assert!(state.dismiss());
        assert_eq!(state.flow(), &FlowState::Idle);
        Ok(())
    }
}
