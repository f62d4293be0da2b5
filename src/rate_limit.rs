//! Request pacing for NCBI E-utilities
//!
//! NCBI allows 3 requests per second from clients without an API key and may
//! block IPs that go faster. Every search and fetch reserves a send slot
//! first; slots are spaced `1 / rate` seconds apart.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, instrument, warn};

use crate::config::NCBI_DEFAULT_RATE;
use crate::error::{PubMedError, Result};

/// Longest wait for a slot before giving up with `RateLimitExceeded`
const MAX_SLOT_WAIT: Duration = Duration::from_secs(60);

/// Upper bound on slot spacing so tiny rates cannot overflow `Instant`
const MAX_INTERVAL: Duration = Duration::from_secs(3600);

/// Spaces requests evenly at a fixed rate
///
/// Clones share the same schedule.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter allowing `rate` requests per second
    ///
    /// A rate that is zero, negative or not a number falls back to NCBI's
    /// anonymous limit.
    ///
    /// ```
    /// use pubmed_industry_papers::rate_limit::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(3.0);
    /// ```
    pub fn new(rate: f64) -> Self {
        let rate = if rate > 0.0 {
            rate
        } else {
            warn!(rate, fallback = NCBI_DEFAULT_RATE, "Invalid request rate, using NCBI default");
            NCBI_DEFAULT_RATE
        };

        let interval = Duration::try_from_secs_f64(rate.recip())
            .unwrap_or(MAX_INTERVAL)
            .min(MAX_INTERVAL);

        Self {
            interval,
            next_slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait for the next free send slot
    ///
    /// Fails with [`PubMedError::RateLimitExceeded`] instead of waiting longer
    /// than a minute, which only happens with very low configured rates.
    #[instrument(skip(self))]
    pub async fn acquire(&self) -> Result<()> {
        let slot = {
            let mut next_slot = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = next_slot.map_or(now, |reserved| reserved.max(now));

            if slot - now > MAX_SLOT_WAIT {
                warn!(
                    wait_secs = (slot - now).as_secs(),
                    "Next request slot is too far away"
                );
                return Err(PubMedError::RateLimitExceeded);
            }

            *next_slot = Some(slot + self.interval);
            slot
        };

        if slot > Instant::now() {
            debug!(
                wait_ms = slot.saturating_duration_since(Instant::now()).as_millis(),
                "Waiting for request slot"
            );
            sleep_until(slot).await;
        }

        Ok(())
    }
}
