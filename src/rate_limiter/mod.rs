use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::Provider;

/// Spreads upstream dispatches out to avoid provider throttling.
///
/// The n-th request to a provider within one aggregation is deferred by
/// `n * interval`. This is a pacing heuristic, not a rate guarantee: separate
/// incoming requests each run their own schedule.
pub struct PacingSchedule {
    interval: Duration,
    slots: HashMap<Provider, u32>,
}

impl PacingSchedule {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            slots: HashMap::new(),
        }
    }

    /// Reserves the next slot for `provider` and returns its dispatch delay.
    pub fn next_delay(&mut self, provider: Provider) -> Duration {
        let slot = self.slots.entry(provider).or_insert(0);
        let delay = self.interval * *slot;
        *slot += 1;
        delay
    }
}

/// Waits out a reserved delay.
pub async fn wait_for_slot(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_linearly_per_provider() {
        let mut schedule = PacingSchedule::new(500);
        assert_eq!(schedule.next_delay(Provider::Espn), Duration::ZERO);
        assert_eq!(schedule.next_delay(Provider::Espn), Duration::from_millis(500));
        assert_eq!(schedule.next_delay(Provider::Scores365), Duration::ZERO);
        assert_eq!(schedule.next_delay(Provider::Espn), Duration::from_millis(1000));
        assert_eq!(schedule.next_delay(Provider::Scores365), Duration::from_millis(500));
    }

    #[test]
    fn zero_interval_never_delays() {
        let mut schedule = PacingSchedule::new(0);
        for _ in 0..5 {
            assert_eq!(schedule.next_delay(Provider::Espn), Duration::ZERO);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_slot_sleeps_the_delay() {
        let start = tokio::time::Instant::now();
        wait_for_slot(Duration::from_millis(1500)).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
