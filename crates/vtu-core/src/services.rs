//! Collaborator seams.
//!
//! Everything the controller needs from the outside world goes through one
//! of these traits. Futures are `?Send`: the browser runs them on one thread.

use crate::flow::PendingPurchase;
use anyhow::Result;
use async_trait::async_trait;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;
use vtu_types::WalletAccount;

/// Callback fired by the wallet widget whenever the connected wallet changes.
pub type StatusListener = Box<dyn Fn(Option<WalletAccount>)>;

/// External wallet-connect widget.
#[async_trait(?Send)]
pub trait WalletWidget {
    /// Open the widget's connect flow. Resolves once the widget is done;
    /// the connected wallet itself arrives through the status listener.
    async fn connect(&self) -> Result<()>;
    async fn disconnect(&self) -> Result<()>;
    fn on_status_change(&self, listener: StatusListener);
}

#[async_trait(?Send)]
pub trait BalanceSource {
    async fn fetch_balance(&self, address: &str) -> Result<u64>;
}

#[async_trait(?Send)]
pub trait Processor {
    async fn process(&self, purchase: &PendingPurchase) -> Result<()>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

pub trait Clock {
    fn now_epoch_ms(&self) -> u64;
}

/// Balance source that reports a fixed amount for every address.
pub struct SimulatedBalance {
    amount: u64,
}

impl SimulatedBalance {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }
}

#[async_trait(?Send)]
impl BalanceSource for SimulatedBalance {
    async fn fetch_balance(&self, address: &str) -> Result<u64> {
        debug!(%address, amount = self.amount, "simulated balance fetch");
        Ok(self.amount)
    }
}

/// Processor that waits out a fixed delay and always succeeds.
pub struct SimulatedProcessor {
    delay: Rc<dyn Delay>,
    duration: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Rc<dyn Delay>, duration: Duration) -> Self {
        Self { delay, duration }
    }
}

#[async_trait(?Send)]
impl Processor for SimulatedProcessor {
    async fn process(&self, purchase: &PendingPurchase) -> Result<()> {
        debug!(
            service = %purchase.kind,
            delay_ms = u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
            "simulating purchase"
        );
        self.delay.sleep(self.duration).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use vtu_types::{FormFields, ServiceKind};

    #[derive(Default)]
    struct RecordingDelay {
        slept: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    #[tokio::test]
    async fn simulated_processor_waits_configured_delay() -> Result<()> {
        let delay = Rc::new(RecordingDelay::default());
        let processor = SimulatedProcessor::new(delay.clone(), Duration::from_millis(3_000));
        let purchase = PendingPurchase {
            kind: ServiceKind::Tv,
            amount: 4_500,
            fields: FormFields::new(),
        };

        processor.process(&purchase).await?;
        assert_eq!(*delay.slept.borrow(), vec![Duration::from_millis(3_000)]);
        Ok(())
    }

    #[tokio::test]
    async fn oversized_delay_is_passed_through_intact() -> Result<()> {
        let delay = Rc::new(RecordingDelay::default());
        let processor = SimulatedProcessor::new(delay.clone(), Duration::MAX);
        let purchase = PendingPurchase {
            kind: ServiceKind::Data,
            amount: 300,
            fields: FormFields::new(),
        };

        processor.process(&purchase).await?;
        assert_eq!(*delay.slept.borrow(), vec![Duration::MAX]);
        Ok(())
    }

    #[tokio::test]
    async fn simulated_balance_is_constant() -> Result<()> {
        let source = SimulatedBalance::new(2_500);
        assert_eq!(source.fetch_balance("EQabc").await?, 2_500);
        assert_eq!(source.fetch_balance("EQdef").await?, 2_500);
        Ok(())
    }
}
