//! Randomized pacing between actions.

use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Pauses for a uniformly random duration between `min_ms` and `max_ms`
/// milliseconds, inclusive.
///
/// The bounds may be given in either order.
pub async fn random_sleep(min_ms: u64, max_ms: u64) {
    let (lo, hi) = if min_ms <= max_ms {
        (min_ms, max_ms)
    } else {
        (max_ms, min_ms)
    };

    let duration_ms = rand::thread_rng().gen_range(lo..=hi);
    debug!(duration_ms, "pausing between actions");
    tokio::time::sleep(Duration::from_millis(duration_ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_sleeps_at_least_the_lower_bound() {
        let start = Instant::now();
        random_sleep(10, 20).await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_accepts_reversed_bounds() {
        random_sleep(5, 1).await;
    }

    #[tokio::test]
    async fn test_accepts_equal_bounds() {
        random_sleep(1, 1).await;
    }
}
