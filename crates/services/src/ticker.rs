//! Cooperative one-shot tick scheduling.
//!
//! Each tick is scheduled only after the previous one has been handled, so at
//! most one tick is ever pending. The owner of the running future cancels it.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
}

impl Ticker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Call `on_tick` once per period until it returns `TickFlow::Stop`.
    ///
    /// Returns the number of ticks delivered. Dropping the future cancels the
    /// pending tick.
    pub fn run<F>(self, mut on_tick: F) -> impl Future<Output = u64>
    where
        F: FnMut() -> TickFlow,
    {
        async move {
            let mut delivered = 0_u64;
            loop {
                tokio::time::sleep(self.period).await;
                delivered += 1;
                if on_tick() == TickFlow::Stop {
                    log::debug!("ticker stopped after {delivered} ticks");
                    return delivered;
                }
            }
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
