use std::sync::Arc;

use quiz_core::{Notice, QuestionId};
use tracing::{debug, warn};

use crate::api::QuizApi;
use crate::error::ApiErrorKind;
use crate::store::QuizStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Answered earlier in this session; nothing was fetched.
    AlreadyAnswered,
    Shown,
    /// The server refused with a message (unknown or hidden question).
    Rejected(String),
    Failed,
    /// A newer selection was made while this one was in flight.
    Superseded,
}

/// Fetches and presents one question.
#[derive(Clone)]
pub struct QuestionLoader {
    api: Arc<dyn QuizApi>,
    store: QuizStore,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, store: QuizStore) -> Self {
        Self { api, store }
    }

    pub async fn load(&self, id: QuestionId) -> LoadOutcome {
        let (ticket, answered) = self.store.update(|state| {
            let ticket = state.issue_load();
            let answered = state.session.is_answered(id);
            if answered {
                state.screen.panel.show_bare(id, Notice::AlreadyAnswered);
            }
            (ticket, answered)
        });
        if answered {
            debug!(question = %id, "already answered, skipping fetch");
            return LoadOutcome::AlreadyAnswered;
        }

        let result = self.api.question(id).await;

        self.store.update(|state| {
            if !state.is_current_load(ticket) {
                debug!(question = %id, ticket, "dropping superseded question load");
                return LoadOutcome::Superseded;
            }
            let cooling_down = state.cooling_down(id);
            let panel = &mut state.screen.panel;
            match result {
                Ok(detail) => {
                    panel.show_detail(detail);
                    // The pending re-enable turns these back on.
                    if cooling_down {
                        panel.set_options_enabled(false);
                    }
                    LoadOutcome::Shown
                }
                Err(err) if err.kind() == ApiErrorKind::Server => {
                    warn!(question = %id, error = %err, "question load rejected");
                    let message = err.server_message().unwrap_or_default().to_string();
                    panel.show_bare(id, Notice::Server(message.clone()));
                    LoadOutcome::Rejected(message)
                }
                Err(err) => {
                    warn!(question = %id, error = %err, kind = ?err.kind(), "question load failed");
                    panel.show_bare(id, Notice::LoadFailed);
                    LoadOutcome::Failed
                }
            }
        })
    }
}
