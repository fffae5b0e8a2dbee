use thiserror::Error;

/// Every way a dashboard action can end early.
///
/// The `Display` text is what the user sees in the notification banner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Failed to connect wallet. Please try again.")]
    Connection(String),

    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Insufficient {symbol} balance. Required: {required}, Available: {available}")]
    InsufficientBalance {
        symbol: String,
        required: u64,
        available: u64,
    },

    #[error("A transaction is already being processed")]
    TransactionInFlight,

    #[error("No transaction awaiting confirmation")]
    NothingToConfirm,

    #[error("Transaction failed. Please try again.")]
    Processing(String),
}

impl DashboardError {
    /// Errors raised by input checks, before anything is confirmed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DashboardError::NotConnected
                | DashboardError::InsufficientBalance { .. }
        )
    }

    /// Underlying cause, when the variant carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DashboardError::Connection(cause) | DashboardError::Processing(cause) => Some(cause),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_names_both_amounts() {
        let err = DashboardError::InsufficientBalance {
            symbol: "AQCNX".to_owned(),
            required: 750,
            available: 200,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient AQCNX balance. Required: 750, Available: 200"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn connection_errors_hide_cause_from_message() {
        let err = DashboardError::Connection("user closed modal".to_owned());
        assert_eq!(err.to_string(), "Failed to connect wallet. Please try again.");
        assert_eq!(err.detail(), Some("user closed modal"));
        assert!(!err.is_validation());
    }
}
