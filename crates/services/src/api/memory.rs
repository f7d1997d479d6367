use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use quiz_core::{ImageRef, QuestionDetail, QuestionId, QuestionStatus, StatusCounts, Verdict};
use reqwest::StatusCode;
use url::Url;

use super::QuizApi;
use crate::error::QuizApiError;

/// Backend endpoints, used to inject failures and count calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    Status,
    AllQuestions,
    Question,
    Answer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub status: usize,
    pub all_questions: usize,
    pub question: usize,
    pub answer: usize,
}

/// Server-side record of a question, answer included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
    pub image: Option<String>,
    pub is_public: bool,
}

impl StoredQuestion {
    #[must_use]
    pub fn new(text: impl Into<String>, options: &[&str], answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
            answer: answer.into(),
            image: None,
            is_public: false,
        }
    }

    #[must_use]
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    #[must_use]
    pub fn with_image(mut self, name: impl Into<String>) -> Self {
        self.image = Some(name.into());
        self
    }
}

#[derive(Default)]
struct MemoryState {
    questions: BTreeMap<QuestionId, StoredQuestion>,
    failing: BTreeSet<Endpoint>,
    calls: CallCounts,
}

/// In-memory backend with the same visibility rules as the real server.
///
/// Used for tests and prototyping; clones share state.
#[derive(Clone)]
pub struct InMemoryQuizApi {
    state: Arc<Mutex<MemoryState>>,
    asset_root: Url,
}

impl Default for InMemoryQuizApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryQuizApi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState::default())),
            asset_root: Url::parse("http://quiz.invalid/static/images/")
                .expect("fixed asset root should be valid"),
        }
    }

    /// Insert or replace a question.
    pub fn insert(&self, id: QuestionId, question: StoredQuestion) {
        if let Ok(mut state) = self.state.lock() {
            state.questions.insert(id, question);
        }
    }

    /// Flip visibility of a question. Returns `false` for unknown ids.
    pub fn set_public(&self, id: QuestionId, is_public: bool) -> bool {
        self.state
            .lock()
            .ok()
            .and_then(|mut state| {
                state
                    .questions
                    .get_mut(&id)
                    .map(|question| question.is_public = is_public)
            })
            .is_some()
    }

    /// Make every call to `endpoint` fail at the transport level until cleared.
    pub fn set_failing(&self, endpoint: Endpoint, failing: bool) {
        if let Ok(mut state) = self.state.lock() {
            if failing {
                state.failing.insert(endpoint);
            } else {
                state.failing.remove(&endpoint);
            }
        }
    }

    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.state
            .lock()
            .map(|state| state.calls)
            .unwrap_or_default()
    }

    fn enter(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, MemoryState>, QuizApiError> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| QuizApiError::transport(std::io::Error::other(err.to_string())))?;
        match endpoint {
            Endpoint::Status => state.calls.status += 1,
            Endpoint::AllQuestions => state.calls.all_questions += 1,
            Endpoint::Question => state.calls.question += 1,
            Endpoint::Answer => state.calls.answer += 1,
        }
        if state.failing.contains(&endpoint) {
            return Err(QuizApiError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("{endpoint:?} unreachable"),
            )));
        }
        Ok(state)
    }
}

fn lookup(state: &MemoryState, id: QuestionId) -> Result<&StoredQuestion, QuizApiError> {
    let question = state.questions.get(&id).ok_or_else(|| QuizApiError::Server {
        status: StatusCode::NOT_FOUND,
        message: "Question not found.".into(),
    })?;
    if !question.is_public {
        return Err(QuizApiError::Server {
            status: StatusCode::FORBIDDEN,
            message: "This question is not public yet.".into(),
        });
    }
    Ok(question)
}

#[async_trait]
impl QuizApi for InMemoryQuizApi {
    async fn status(&self) -> Result<StatusCounts, QuizApiError> {
        let state = self.enter(Endpoint::Status)?;
        let visible = state.questions.values().filter(|q| q.is_public).count();
        Ok(StatusCounts {
            total: u32::try_from(state.questions.len()).unwrap_or(u32::MAX),
            visible: u32::try_from(visible).unwrap_or(u32::MAX),
        })
    }

    async fn all_questions(&self) -> Result<Vec<QuestionStatus>, QuizApiError> {
        let state = self.enter(Endpoint::AllQuestions)?;
        Ok(state
            .questions
            .iter()
            .map(|(id, question)| QuestionStatus::new(*id, question.is_public))
            .collect())
    }

    async fn question(&self, id: QuestionId) -> Result<QuestionDetail, QuizApiError> {
        let state = self.enter(Endpoint::Question)?;
        let question = lookup(&state, id)?;
        let image = question
            .image
            .as_deref()
            .map(|name| ImageRef::resolve(&self.asset_root, name))
            .transpose()
            .map_err(|err| QuizApiError::Decode(err.to_string()))?;
        Ok(QuestionDetail {
            id,
            text: question.text.clone(),
            options: question.options.clone(),
            image,
        })
    }

    async fn submit_answer(&self, id: QuestionId, answer: &str) -> Result<Verdict, QuizApiError> {
        let state = self.enter(Endpoint::Answer)?;
        let question = lookup(&state, id)?;
        Ok(Verdict::from(question.answer == answer))
    }
}
