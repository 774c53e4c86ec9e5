//! Pacing between page requests
//!
//! A [`Pacer`] waits at least its delay before each page. The wait is a
//! loop against a deadline: if a nap returns early, the next nap covers
//! only what is left, never the full delay again.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// A sleep that may end before the requested duration has passed
#[async_trait]
pub trait Napper: Send + Sync {
    /// Sleep for up to `duration`
    async fn nap(&self, duration: Duration);
}

/// Napper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioNapper;

#[async_trait]
impl Napper for TokioNapper {
    async fn nap(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleep until at least `duration` has elapsed.
///
/// No upper bound on the actual wait is promised.
pub async fn sleep_at_least(duration: Duration, napper: &dyn Napper) {
    let deadline = Instant::now() + duration;
    loop {
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        napper.nap(deadline - now).await;
    }
}

/// Enforces the pause before each page request
#[derive(Clone)]
pub struct Pacer {
    delay: Duration,
    napper: Arc<dyn Napper>,
}

impl Pacer {
    /// Create a pacer sleeping on the tokio timer
    pub fn new(delay: Duration) -> Self {
        Self::with_napper(delay, Arc::new(TokioNapper))
    }

    /// Create a pacer with a custom napper
    pub fn with_napper(delay: Duration, napper: Arc<dyn Napper>) -> Self {
        Self { delay, napper }
    }

    /// The minimum pause
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the pause
    pub async fn pause(&self) {
        sleep_at_least(self.delay, self.napper.as_ref()).await;
    }
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
