use std::sync::Arc;
use std::time::Duration;

use quiz_core::{Notice, QuestionId, Verdict};
use tracing::{debug, info, warn};

use crate::api::QuizApi;
use crate::clear::ClearConditionEvaluator;
use crate::error::ApiErrorKind;
use crate::poller::StatusPoller;
use crate::store::{Cooldown, QuizState, QuizStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission for this question was already awaiting its verdict.
    Ignored,
    Correct,
    /// Options re-enable after the cooldown.
    Incorrect,
    Rejected(String),
    Failed,
}

/// Sends answers, applies verdicts and triggers re-synchronization.
#[derive(Clone)]
pub struct AnswerSubmitter {
    api: Arc<dyn QuizApi>,
    store: QuizStore,
    evaluator: ClearConditionEvaluator,
    poller: StatusPoller,
    cooldown: Duration,
}

impl AnswerSubmitter {
    #[must_use]
    pub fn new(
        api: Arc<dyn QuizApi>,
        store: QuizStore,
        evaluator: ClearConditionEvaluator,
        poller: StatusPoller,
        cooldown: Duration,
    ) -> Self {
        Self {
            api,
            store,
            evaluator,
            poller,
            cooldown,
        }
    }

    pub async fn submit(&self, id: QuestionId, answer: &str) -> SubmitOutcome {
        if !self.store.update(|state| state.begin_submission(id)) {
            debug!(question = %id, "submission already in flight");
            return SubmitOutcome::Ignored;
        }

        let result = self.api.submit_answer(id, answer).await;

        let (outcome, cooldown) = self.store.update(|state| {
            state.end_submission(id);
            let on_screen = state.screen.panel.shows(id);
            if on_screen {
                state.screen.panel.set_options_enabled(false);
            }
            // Only a fresh incorrect verdict may leave a re-enable pending.
            if !matches!(result, Ok(Verdict::Incorrect)) {
                state.cancel_cooldown(id);
            }
            let set_notice = |state: &mut QuizState, notice: Notice| {
                if on_screen {
                    state.screen.panel.notice = Some(notice);
                }
            };

            match result {
                Ok(Verdict::Correct) => {
                    set_notice(state, Notice::Correct);
                    state.session.record_correct(id);
                    state.rerender();
                    (SubmitOutcome::Correct, None)
                }
                Ok(Verdict::Incorrect) => {
                    set_notice(state, Notice::Incorrect);
                    let cooldown = on_screen.then(|| state.start_cooldown(id));
                    (SubmitOutcome::Incorrect, cooldown)
                }
                Err(err) if err.kind() == ApiErrorKind::Server => {
                    warn!(question = %id, error = %err, "answer rejected");
                    let message = err.server_message().unwrap_or_default().to_string();
                    set_notice(state, Notice::Server(message.clone()));
                    (SubmitOutcome::Rejected(message), None)
                }
                Err(err) => {
                    warn!(
                        question = %id,
                        error = %err,
                        kind = ?err.kind(),
                        "answer submission failed"
                    );
                    set_notice(state, Notice::SubmitFailed);
                    (SubmitOutcome::Failed, None)
                }
            }
        });

        match outcome {
            SubmitOutcome::Correct => info!(question = %id, "correct answer"),
            SubmitOutcome::Incorrect => info!(question = %id, "incorrect answer"),
            _ => {}
        }
        if let Some(cooldown) = cooldown {
            self.schedule_reenable(cooldown);
        }

        self.evaluator.evaluate().await;
        self.poller.poll().await;
        outcome
    }

    fn schedule_reenable(&self, cooldown: Cooldown) {
        let store = self.store.clone();
        let delay = self.cooldown;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if store.update(|state| state.finish_cooldown(cooldown)) {
                debug!(question = %cooldown.question, "options re-enabled");
            }
        });
    }
}
