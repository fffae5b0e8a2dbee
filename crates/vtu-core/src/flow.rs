//! Purchase flow state machine.
//!
//! States: `Idle` → `FormSubmitted` → (`Rejected` | `ConfirmationPending`)
//! → `Processing` → (`Completed` | `Failed`).
//! Transitions live on [`AppState`](crate::state::AppState); this module only
//! holds the states and what each one shows.

use crate::error::DashboardError;
use vtu_types::{FormFields, ServiceKind, Transaction};

/// A form as submitted, before any checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub kind: ServiceKind,
    pub fields: FormFields,
}

/// A purchase that passed validation and carries its resolved amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPurchase {
    pub kind: ServiceKind,
    pub amount: u64,
    pub fields: FormFields,
}

impl PendingPurchase {
    pub fn service_name(&self) -> &'static str {
        self.kind.service_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    FormSubmitted(PurchaseRequest),
    Rejected(DashboardError),
    ConfirmationPending(PendingPurchase),
    Processing(PendingPurchase),
    Completed(Transaction),
    Failed {
        purchase: PendingPurchase,
        error: DashboardError,
    },
}

/// Icon and message for the status modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub icon: &'static str,
    pub message: &'static str,
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::FormSubmitted(_) => "form_submitted",
            FlowState::Rejected(_) => "rejected",
            FlowState::ConfirmationPending(_) => "confirmation_pending",
            FlowState::Processing(_) => "processing",
            FlowState::Completed(_) => "completed",
            FlowState::Failed { .. } => "failed",
        }
    }

    /// True while a confirmed purchase is being processed.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, FlowState::Processing(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FlowState::Rejected(_) | FlowState::Completed(_) | FlowState::Failed { .. }
        )
    }

    pub fn pending_confirmation(&self) -> Option<&PendingPurchase> {
        match self {
            FlowState::ConfirmationPending(purchase) => Some(purchase),
            _ => None,
        }
    }

    pub fn status_display(&self) -> Option<StatusDisplay> {
        match self {
            FlowState::Processing(_) => Some(StatusDisplay {
                icon: "⏳",
                message: "Processing transaction...",
            }),
            FlowState::Completed(_) => Some(StatusDisplay {
                icon: "✅",
                message: "Transaction successful!",
            }),
            FlowState::Failed { .. } => Some(StatusDisplay {
                icon: "❌",
                message: "Transaction failed. Please try again.",
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase() -> PendingPurchase {
        PendingPurchase {
            kind: ServiceKind::Electricity,
            amount: 1200,
            fields: FormFields::new(),
        }
    }

    #[test]
    fn only_processing_is_in_flight() {
        assert!(FlowState::Processing(purchase()).is_in_flight());
        assert!(!FlowState::ConfirmationPending(purchase()).is_in_flight());
        assert!(!FlowState::Idle.is_in_flight());
    }

    #[test]
    fn status_modal_follows_processing_outcome() {
        assert_eq!(FlowState::Idle.status_display(), None);
        assert_eq!(FlowState::ConfirmationPending(purchase()).status_display(), None);

        let failed = FlowState::Failed {
            purchase: purchase(),
            error: DashboardError::Processing("boom".to_owned()),
        };
        let display = failed.status_display().expect("failed state shows status");
        assert_eq!(display.icon, "❌");
        assert!(failed.is_terminal());
    }
}
