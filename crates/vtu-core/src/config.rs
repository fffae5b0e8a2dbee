//! Dashboard settings.
//!
//! Every field has a default, so a partial (or empty) JSON document is a
//! valid configuration.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MANIFEST_URL: &str =
    "https://ton-connect.github.io/demo-dapp-with-react-ui/tonconnect-manifest.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    pub token_symbol: String,
    pub history_capacity: usize,
    pub processing_delay_ms: u64,
    pub status_dismiss_ms: u64,
    pub notification_ms: u64,
    /// Balance reported by the simulated fetch on connect.
    pub simulated_balance: u64,
    pub wallet_manifest_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            token_symbol: "AQCNX".to_owned(),
            history_capacity: 10,
            processing_delay_ms: 3_000,
            status_dismiss_ms: 2_000,
            notification_ms: 4_000,
            simulated_balance: 0,
            wallet_manifest_url: DEFAULT_MANIFEST_URL.to_owned(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            bail!("history_capacity must be at least 1");
        }
        if self.token_symbol.trim().is_empty() {
            bail!("token_symbol must not be empty");
        }
        Ok(())
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn status_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.status_dismiss_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}
