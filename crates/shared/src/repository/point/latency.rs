use rand::Rng;
use std::time::Duration;

/// Simulated access latency for the in-memory tables.
///
/// Each call sleeps for a uniformly random duration in `0..=max` before
/// touching the table. A zero maximum disables the pause entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreLatency {
    max: Duration,
}

impl StoreLatency {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn up_to(max: Duration) -> Self {
        Self { max }
    }

    pub fn from_millis(max_millis: u64) -> Self {
        Self::up_to(Duration::from_millis(max_millis))
    }

    pub async fn pause(&self) {
        if self.max.is_zero() {
            return;
        }

        let max_millis = u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX);
        let millis = rand::rng().random_range(0..=max_millis);
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
