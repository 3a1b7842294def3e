use rand::Rng;
use std::time::Duration;

/// Exponential backoff: randomized first delay, doubled per retry, capped.
#[derive(Debug, Clone, Copy)]
pub struct BackoffPolicy {
    initial_min: Duration,
    initial_max: Duration,
    max_delay: Duration,
}

impl BackoffPolicy {
    pub fn new(initial_min: Duration, initial_max: Duration, max_delay: Duration) -> Self {
        let initial_max = initial_max.max(initial_min);
        Self {
            initial_min,
            initial_max,
            max_delay,
        }
    }

    /// Delay before the next retry given the previous one (`None` for the first retry).
    pub fn next_delay(&self, previous: Option<Duration>) -> Duration {
        let delay = match previous {
            None => self.initial_delay(),
            Some(prev) => prev.saturating_mul(2),
        };
        delay.min(self.max_delay)
    }

    fn initial_delay(&self) -> Duration {
        let min = self.initial_min.as_millis() as u64;
        let max = self.initial_max.as_millis() as u64;
        if min == max {
            return Duration::from_millis(min);
        }
        Duration::from_millis(rand::rng().random_range(min..=max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(policy: &BackoffPolicy, retries: u32) -> Vec<Duration> {
        let mut previous = None;
        (0..retries)
            .map(|_| {
                let delay = policy.next_delay(previous);
                previous = Some(delay);
                delay
            })
            .collect()
    }

    #[test]
    fn test_schedule_is_non_decreasing_and_capped() {
        let policy = BackoffPolicy::new(
            Duration::from_millis(500),
            Duration::from_millis(1500),
            Duration::from_millis(5000),
        );

        for _ in 0..50 {
            let delays = schedule(&policy, 6);
            assert_eq!(delays.len(), 6);
            assert!(delays[0] >= Duration::from_millis(500));
            assert!(delays[0] <= Duration::from_millis(1500));
            for pair in delays.windows(2) {
                assert!(pair[1] >= pair[0], "delays must not decrease: {:?}", delays);
            }
            assert!(delays.iter().all(|d| *d <= Duration::from_millis(5000)));
            assert_eq!(*delays.last().unwrap(), Duration::from_millis(5000));
        }
    }

    #[test]
    fn test_initial_window_above_cap_is_capped() {
        let policy = BackoffPolicy::new(
            Duration::from_secs(10),
            Duration::from_secs(20),
            Duration::from_secs(3),
        );
        assert!(schedule(&policy, 3).iter().all(|d| *d == Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_window_never_waits() {
        let policy = BackoffPolicy::new(Duration::ZERO, Duration::ZERO, Duration::ZERO);
        assert_eq!(schedule(&policy, 2), vec![Duration::ZERO; 2]);
    }
}
