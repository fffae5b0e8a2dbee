//! Browser timers and clock.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use vtu_core::services::{Clock, Delay};

pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_epoch_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
