//! Provider-side rate limit bookkeeping.
//!
//! Open Topo Data's public instance allows 1 request per second and 1000
//! requests per day. The per-second limit is handled by pacing (sleeping
//! until a slot opens); the daily limit is a hard error. The daily counter
//! resets at UTC date rollover.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::error::{ElevationError, ElevationResult};

/// Snapshot of current rate limit usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub daily_requests_used: u32,
    pub daily_requests_remaining: u32,
    pub max_requests_per_day: u32,
}

#[derive(Debug)]
struct LimiterState {
    last_request: Option<DateTime<Utc>>,
    daily_count: u32,
    window_date: NaiveDate,
}

/// Tracks request timing against the provider's published limits.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    max_per_day: u32,
    state: Mutex<LimiterState>,
}

impl RateLimiter {
    /// Create a limiter with the given minimum spacing and daily cap.
    pub fn new(min_interval: Duration, max_per_day: u32) -> Self {
        Self {
            min_interval,
            max_per_day,
            state: Mutex::new(LimiterState {
                last_request: None,
                daily_count: 0,
                window_date: Utc::now().date_naive(),
            }),
        }
    }

    /// Limiter matching the public Open Topo Data instance.
    pub fn open_topo_data() -> Self {
        Self::new(Duration::from_secs(1), 1000)
    }

    /// Check that a request is allowed within the daily cap.
    pub fn check(&self) -> ElevationResult<()> {
        let mut state = self.state.lock().expect("rate limiter lock poisoned");
        Self::roll_window(&mut state);

        if state.daily_count >= self.max_per_day {
            warn!(
                used = state.daily_count,
                max = self.max_per_day,
                "daily rate limit exhausted"
            );
            return Err(ElevationError::RateLimited(format!(
                "daily limit of {} requests reached",
                self.max_per_day
            )));
        }

        Ok(())
    }

    /// Sleep until the per-second spacing allows another request.
    pub async fn pace(&self) {
        let wait = {
            let state = self.state.lock().expect("rate limiter lock poisoned");
            state.last_request.and_then(|last| {
                let elapsed = Utc::now().signed_duration_since(last);
                let elapsed = elapsed.to_std().unwrap_or(Duration::ZERO);
                self.min_interval.checked_sub(elapsed)
            })
        };

        if let Some(wait) = wait {
            debug!(wait_ms = wait.as_millis() as u64, "pacing elevation request");
            tokio::time::sleep(wait).await;
        }
    }

    /// Record that a request was sent.
    pub fn record(&self) {
        let mut state = self.state.lock().expect("rate limiter lock poisoned");
        Self::roll_window(&mut state);
        state.last_request = Some(Utc::now());
        state.daily_count += 1;
        debug!(
            daily_count = state.daily_count,
            max = self.max_per_day,
            "elevation request recorded"
        );
    }

    /// Current usage snapshot.
    pub fn status(&self) -> RateLimitStatus {
        let mut state = self.state.lock().expect("rate limiter lock poisoned");
        Self::roll_window(&mut state);
        RateLimitStatus {
            daily_requests_used: state.daily_count,
            daily_requests_remaining: self.max_per_day.saturating_sub(state.daily_count),
            max_requests_per_day: self.max_per_day,
        }
    }

    fn roll_window(state: &mut LimiterState) {
        let today = Utc::now().date_naive();
        if today > state.window_date {
            state.daily_count = 0;
            state.window_date = today;
            state.last_request = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_cap_enforced() {
        let limiter = RateLimiter::new(Duration::ZERO, 2);
        assert!(limiter.check().is_ok());
        limiter.record();
        assert!(limiter.check().is_ok());
        limiter.record();
        assert!(matches!(
            limiter.check(),
            Err(ElevationError::RateLimited(_))
        ));
    }

    #[test]
    fn test_status_counts() {
        let limiter = RateLimiter::new(Duration::ZERO, 10);
        limiter.record();
        limiter.record();
        let status = limiter.status();
        assert_eq!(status.daily_requests_used, 2);
        assert_eq!(status.daily_requests_remaining, 8);
        assert_eq!(status.max_requests_per_day, 10);
    }

    #[test]
    fn test_pace_without_prior_request_is_immediate() {
        let limiter = RateLimiter::open_topo_data();
        // No request recorded yet, so pace must resolve without sleeping.
        tokio_test::block_on(limiter.pace());
    }
}
