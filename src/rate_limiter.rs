use crate::error::GatewayError;
use crate::store::CounterStore;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of one admission check. Computed fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    pub limit: u64,
    pub remaining: u64,
    pub reset_secs: u64,
}

/// Sliding-window admission control backed by an external counter store.
///
/// All counter state lives in the store, so admission decisions are shared
/// across gateway instances and survive restarts. Accounting is not
/// reversible: a canceled request keeps its window entry.
#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
    limit: u64,
    window_secs: i64,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn CounterStore>, limit: u64, window_secs: u64) -> Self {
        // A zero-width window would divide by zero when computing the reset;
        // clamp to one second rather than panic on the first request.
        Self {
            store,
            limit,
            window_secs: window_secs.max(1) as i64,
        }
    }

    /// Decides whether the request identified by `key` is admitted at `now`
    /// (unix seconds).
    ///
    /// Pruning is lazy: every call removes entries that have slid out of the
    /// window before counting. Any store failure rejects the request; the
    /// limiter never fails open.
    pub async fn admit(&self, key: &str, now: i64) -> Result<RateDecision, GatewayError> {
        let counter_key = self.counter_key(key);
        let window_start = now - self.window_secs;
        let reset_secs = (self.window_secs - now.rem_euclid(self.window_secs)) as u64;

        self.store.prune(&counter_key, window_start).await?;
        let count = self.store.count(&counter_key, window_start, now).await?;

        if count >= self.limit {
            return Ok(RateDecision {
                allowed: false,
                limit: self.limit,
                remaining: 0,
                reset_secs,
            });
        }

        // The member carries a random suffix so concurrent same-second
        // admissions each occupy their own entry instead of collapsing
        // into one and undercounting load.
        let member = format!("{}-{}", now, Uuid::new_v4());
        self.store.record(&counter_key, now, &member).await?;
        self.store.expire(&counter_key, self.window_secs * 2).await?;

        Ok(RateDecision {
            allowed: true,
            limit: self.limit,
            remaining: self.limit - count - 1,
            reset_secs,
        })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    fn counter_key(&self, key: &str) -> String {
        format!("rate_limit:{}", key)
    }
}
