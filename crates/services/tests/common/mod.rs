#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::{QuestionDetail, QuestionId, QuestionStatus, StatusCounts, Verdict};
use services::{ClientConfig, Endpoint, InMemoryQuizApi, QuizApi, QuizApiError, StoredQuestion};
use tokio::sync::oneshot;

pub fn qid(raw: u64) -> QuestionId {
    QuestionId::new(raw).unwrap()
}

pub fn config() -> ClientConfig {
    ClientConfig::default()
}

/// Three questions, the first two public.
pub fn seeded_api() -> InMemoryQuizApi {
    let api = InMemoryQuizApi::new();
    api.insert(
        qid(1),
        StoredQuestion::new("Capital of Japan?", &["Tokyo", "Osaka", "Kyoto"], "Tokyo")
            .with_image("tokyo.png")
            .public(true),
    );
    api.insert(
        qid(2),
        StoredQuestion::new("2 + 2?", &["3", "4", "5"], "4")
            .with_image("math.png")
            .public(true),
    );
    api.insert(
        qid(3),
        StoredQuestion::new("Largest ocean?", &["Atlantic", "Pacific", "Indian"], "Pacific"),
    );
    api
}

/// Forwards to an in-memory backend but holds the responses of selected
/// endpoints until the test releases them.
///
/// The answer is computed when the call is made, so a held response reflects
/// the server state at issue time.
pub struct GatedApi {
    inner: InMemoryQuizApi,
    gated: BTreeSet<Endpoint>,
    held: Mutex<Vec<(Endpoint, Option<oneshot::Sender<()>>)>>,
}

impl GatedApi {
    pub fn new(inner: InMemoryQuizApi, gated: &[Endpoint]) -> Arc<Self> {
        Arc::new(Self {
            inner,
            gated: gated.iter().copied().collect(),
            held: Mutex::new(Vec::new()),
        })
    }

    /// Number of held calls made to `endpoint` so far.
    pub fn held_calls(&self, endpoint: Endpoint) -> usize {
        let held = self.held.lock().unwrap();
        held.iter().filter(|(e, _)| *e == endpoint).count()
    }

    /// Release the `nth` (0-based) held call of `endpoint`.
    pub fn release(&self, endpoint: Endpoint, nth: usize) {
        let mut held = self.held.lock().unwrap();
        let sender = held
            .iter_mut()
            .filter(|(e, _)| *e == endpoint)
            .nth(nth)
            .and_then(|(_, sender)| sender.take())
            .expect("call to release");
        let _ = sender.send(());
    }

    pub async fn wait_for_calls(&self, endpoint: Endpoint, count: usize) {
        while self.held_calls(endpoint) < count {
            tokio::task::yield_now().await;
        }
    }

    async fn hold(&self, endpoint: Endpoint) {
        if !self.gated.contains(&endpoint) {
            return;
        }
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().push((endpoint, Some(tx)));
        let _ = rx.await;
    }
}

#[async_trait]
impl QuizApi for GatedApi {
    async fn status(&self) -> Result<StatusCounts, QuizApiError> {
        let result = self.inner.status().await;
        self.hold(Endpoint::Status).await;
        result
    }

    async fn all_questions(&self) -> Result<Vec<QuestionStatus>, QuizApiError> {
        let result = self.inner.all_questions().await;
        self.hold(Endpoint::AllQuestions).await;
        result
    }

    async fn question(&self, id: QuestionId) -> Result<QuestionDetail, QuizApiError> {
        let result = self.inner.question(id).await;
        self.hold(Endpoint::Question).await;
        result
    }

    async fn submit_answer(&self, id: QuestionId, answer: &str) -> Result<Verdict, QuizApiError> {
        let result = self.inner.submit_answer(id, answer).await;
        self.hold(Endpoint::Answer).await;
        result
    }
}
