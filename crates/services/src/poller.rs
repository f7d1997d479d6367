use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::api::QuizApi;
use crate::clear::ClearConditionEvaluator;
use crate::store::QuizStore;

/// What happened to one half of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer poll had already been applied.
    Stale,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    pub seq: u64,
    pub counts: RefreshOutcome,
    pub list: RefreshOutcome,
}

/// Republishes server visibility into the store, on a timer and on demand.
#[derive(Clone)]
pub struct StatusPoller {
    api: Arc<dyn QuizApi>,
    store: QuizStore,
    evaluator: ClearConditionEvaluator,
    issued: Arc<AtomicU64>,
    interval: Duration,
}

impl StatusPoller {
    #[must_use]
    pub fn new(
        api: Arc<dyn QuizApi>,
        store: QuizStore,
        evaluator: ClearConditionEvaluator,
        interval: Duration,
    ) -> Self {
        Self {
            api,
            store,
            evaluator,
            issued: Arc::new(AtomicU64::new(0)),
            interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Read counts and the question list and apply whichever halves succeed.
    ///
    /// Failures keep the previously applied values; responses that resolve
    /// after a newer poll's are dropped. While the completion banner is up, a
    /// change in the visible count triggers a fresh clear check.
    pub async fn poll(&self) -> PollReport {
        let seq = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        let (counts, questions) = tokio::join!(self.api.status(), self.api.all_questions());

        let mut recheck_clear = false;
        let counts = match counts {
            Ok(counts) => {
                let (applied, visible_changed) = self.store.update(|state| {
                    let before = state.session.cached_counts().map(|cached| cached.visible);
                    let applied = state.apply_counts(seq, counts);
                    let changed = applied
                        && state.screen.banner_visible
                        && before != Some(counts.visible);
                    (applied, changed)
                });
                recheck_clear = visible_changed;
                if applied {
                    RefreshOutcome::Applied
                } else {
                    debug!(seq, "discarding stale status counts");
                    RefreshOutcome::Stale
                }
            }
            Err(err) => {
                warn!(seq, error = %err, kind = ?err.kind(), "status poll failed");
                RefreshOutcome::Failed
            }
        };

        let list = match questions {
            Ok(questions) => {
                if self.store.update(|state| state.apply_questions(seq, questions)) {
                    RefreshOutcome::Applied
                } else {
                    debug!(seq, "discarding stale question list");
                    RefreshOutcome::Stale
                }
            }
            Err(err) => {
                warn!(seq, error = %err, kind = ?err.kind(), "question list poll failed");
                RefreshOutcome::Failed
            }
        };

        if recheck_clear {
            debug!(seq, "visible count changed under the banner, re-checking");
            self.evaluator.evaluate().await;
        }

        PollReport { seq, counts, list }
    }

    /// Poll every interval, forever.
    ///
    /// Each tick's poll runs as its own task so a stalled request never holds
    /// up the next tick. The first tick is skipped; callers poll once at start.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let poller = self.clone();
            tokio::spawn(async move {
                poller.poll().await;
            });
        }
    }
}
