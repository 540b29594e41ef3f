use std::collections::HashMap;
use std::time::{Duration, Instant};

// Stale keys are dropped every this many checks
const SWEEP_INTERVAL: u64 = 256;

#[derive(Debug, Clone, Copy)]
pub struct RateDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

pub trait RateLimiter {
    fn check(&mut self, key: &str) -> RateDecision;
}

/// Time-windowed request counter keyed by caller id. Each check prunes
/// the key's expired hits; a periodic sweep drops keys with no recent
/// activity so the store stays bounded.
pub struct WindowedLimiter {
    max_requests: u32,
    window: Duration,
    hits: HashMap<String, Vec<Instant>>,
    checks: u64,
}

impl WindowedLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        WindowedLimiter {
            max_requests,
            window,
            hits: HashMap::new(),
            checks: 0,
        }
    }

    pub fn check_at(&mut self, key: &str, now: Instant) -> RateDecision {
        self.checks += 1;
        if self.checks % SWEEP_INTERVAL == 0 {
            self.sweep(now);
        }

        let window = self.window;
        let hits = self.hits.entry(key.to_string()).or_default();
        hits.retain(|stamp| now.duration_since(*stamp) < window);

        if hits.len() as u32 >= self.max_requests {
            let oldest = hits.first().copied().unwrap_or(now);
            return RateDecision {
                allowed: false,
                remaining: 0,
                reset_after: window.saturating_sub(now.duration_since(oldest)),
            };
        }

        hits.push(now);
        RateDecision {
            allowed: true,
            remaining: self.max_requests - hits.len() as u32,
            reset_after: window,
        }
    }

    fn sweep(&mut self, now: Instant) {
        let window = self.window;
        self.hits.retain(|_, stamps| {
            stamps.retain(|stamp| now.duration_since(*stamp) < window);
            !stamps.is_empty()
        });
    }
}

impl RateLimiter for WindowedLimiter {
    fn check(&mut self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_limit_then_denies() {
        let mut limiter = WindowedLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();

        assert_eq!(limiter.check_at("ai", now).remaining, 2);
        assert_eq!(limiter.check_at("ai", now).remaining, 1);
        assert_eq!(limiter.check_at("ai", now).remaining, 0);

        let denied = limiter.check_at("ai", now);
        assert!(!denied.allowed);
        assert_eq!(denied.remaining, 0);
        assert!(denied.reset_after <= Duration::from_secs(60));
    }

    #[test]
    fn window_expiry_frees_the_budget() {
        let mut limiter = WindowedLimiter::new(2, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.check_at("ai", start).allowed);
        assert!(limiter.check_at("ai", start).allowed);
        assert!(!limiter.check_at("ai", start).allowed);

        let later = start + Duration::from_secs(61);
        assert!(limiter.check_at("ai", later).allowed);
    }

    #[test]
    fn keys_are_counted_independently() {
        let mut limiter = WindowedLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check_at("a", now).allowed);
        assert!(!limiter.check_at("a", now).allowed);
        assert!(limiter.check_at("b", now).allowed);
    }

    #[test]
    fn zero_budget_denies_everything() {
        let mut limiter = WindowedLimiter::new(0, Duration::from_secs(60));
        assert!(!limiter.check_at("ai", Instant::now()).allowed);
    }

    #[test]
    fn sweep_drops_stale_keys() {
        let mut limiter = WindowedLimiter::new(10, Duration::from_secs(1));
        let start = Instant::now();
        limiter.check_at("old", start);

        let later = start + Duration::from_secs(5);
        for i in 0..SWEEP_INTERVAL {
            limiter.check_at(&format!("k{}", i), later);
        }
        assert!(!limiter.hits.contains_key("old"));
    }
}
