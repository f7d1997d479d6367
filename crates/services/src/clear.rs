use std::sync::Arc;

use tracing::{info, warn};

use crate::api::QuizApi;
use crate::store::QuizStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Pending,
    /// The fresh count could not be read; the banner was left as it was.
    Unknown,
}

/// Toggles the completion banner from a freshly read visible count.
#[derive(Clone)]
pub struct ClearConditionEvaluator {
    api: Arc<dyn QuizApi>,
    store: QuizStore,
}

impl ClearConditionEvaluator {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, store: QuizStore) -> Self {
        Self { api, store }
    }

    /// Never consults the cached counts; visibility may have changed since
    /// the last poll.
    pub async fn evaluate(&self) -> ClearOutcome {
        let counts = match self.api.status().await {
            Ok(counts) => counts,
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "clear check could not read status");
                return ClearOutcome::Unknown;
            }
        };

        let (outcome, newly_cleared) = self.store.update(|state| {
            if state.session.clears(counts.visible) {
                let newly_cleared = !state.screen.banner_visible;
                state.screen.show_completion();
                (ClearOutcome::Cleared, newly_cleared)
            } else {
                state.screen.hide_completion();
                (ClearOutcome::Pending, false)
            }
        });
        if newly_cleared {
            info!(visible = counts.visible, "all visible questions answered");
        }
        outcome
    }
}
