use std::sync::Arc;

use quiz_core::{QuestionId, QuestionPhase, QuizScreen, SessionState};
use tokio::sync::watch;
use tracing::info;

use crate::api::{HttpQuizApi, QuizApi};
use crate::clear::{ClearConditionEvaluator, ClearOutcome};
use crate::config::ClientConfig;
use crate::loader::{LoadOutcome, QuestionLoader};
use crate::poller::{PollReport, StatusPoller};
use crate::store::{QuizState, QuizStore};
use crate::submitter::{AnswerSubmitter, SubmitOutcome};

/// Assembles the quiz components around one shared store.
#[derive(Clone)]
pub struct QuizController {
    store: QuizStore,
    poller: StatusPoller,
    loader: QuestionLoader,
    submitter: AnswerSubmitter,
    evaluator: ClearConditionEvaluator,
}

impl QuizController {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, config: &ClientConfig) -> Self {
        let store = QuizStore::new();
        let evaluator = ClearConditionEvaluator::new(Arc::clone(&api), store.clone());
        let poller = StatusPoller::new(
            Arc::clone(&api),
            store.clone(),
            evaluator.clone(),
            config.poll_interval(),
        );
        let loader = QuestionLoader::new(Arc::clone(&api), store.clone());
        let submitter = AnswerSubmitter::new(
            api,
            store.clone(),
            evaluator.clone(),
            poller.clone(),
            config.retry_cooldown(),
        );

        Self {
            store,
            poller,
            loader,
            submitter,
            evaluator,
        }
    }

    /// Build a controller talking to the HTTP backend named by `config`.
    #[must_use]
    pub fn http(config: &ClientConfig) -> Self {
        Self::new(Arc::new(HttpQuizApi::new(config)), config)
    }

    /// Initial sync: one poll and one clear check.
    pub async fn start(&self) -> PollReport {
        info!(interval = ?self.poller.interval(), "starting quiz sync");
        let report = self.poller.poll().await;
        self.evaluator.evaluate().await;
        report
    }

    /// Drive the periodic poll. Never returns.
    pub async fn run_polling(&self) {
        self.poller.run().await;
    }

    pub async fn poll(&self) -> PollReport {
        self.poller.poll().await
    }

    pub async fn load(&self, id: QuestionId) -> LoadOutcome {
        self.loader.load(id).await
    }

    pub async fn submit(&self, id: QuestionId, answer: &str) -> SubmitOutcome {
        self.submitter.submit(id, answer).await
    }

    pub async fn evaluate(&self) -> ClearOutcome {
        self.evaluator.evaluate().await
    }

    #[must_use]
    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.store.subscribe()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        self.store.screen()
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.store.session()
    }

    #[must_use]
    pub fn phase(&self, id: QuestionId) -> QuestionPhase {
        self.store.read(|state| state.phase(id))
    }
}
