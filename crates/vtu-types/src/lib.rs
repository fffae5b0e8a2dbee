use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Raw input values captured from a service form, keyed by input id.
pub type FormFields = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
}

/// Wallet object delivered by the connect widget's status callback.
///
/// Only `account.address` is consumed; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectedWallet {
    pub account: WalletAccount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Airtime,
    Data,
    Electricity,
    Tv,
}

/// Where a form keeps the amount it charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSource {
    /// A plain numeric input.
    Direct(&'static str),
    /// A `<select>` whose values look like `plan-amount`.
    Plan(&'static str),
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Airtime,
        ServiceKind::Data,
        ServiceKind::Electricity,
        ServiceKind::Tv,
    ];

    pub fn form_id(self) -> &'static str {
        match self {
            ServiceKind::Airtime => "airtime-form",
            ServiceKind::Data => "data-form",
            ServiceKind::Electricity => "electricity-form",
            ServiceKind::Tv => "tv-form",
        }
    }

    pub fn from_form_id(form_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == form_id)
    }

    pub fn service_name(self) -> &'static str {
        match self {
            ServiceKind::Airtime => "Airtime Recharge",
            ServiceKind::Data => "Data Bundle",
            ServiceKind::Electricity => "Electricity Bill",
            ServiceKind::Tv => "TV Subscription",
        }
    }

    pub fn amount_source(self) -> AmountSource {
        match self {
            ServiceKind::Airtime => AmountSource::Direct("airtime-amount"),
            ServiceKind::Data => AmountSource::Plan("data-plan"),
            ServiceKind::Electricity => AmountSource::Direct("electricity-amount"),
            ServiceKind::Tv => AmountSource::Plan("tv-package"),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// Completion time in epoch milliseconds, doubling as the record id.
    pub id: u64,
    pub service: ServiceKind,
    pub service_name: String,
    pub amount: u64,
    pub status: TransactionStatus,
    pub timestamp_epoch_ms: u64,
    #[serde(default)]
    pub details: FormFields,
}
