//! Backend seam: every server interaction of the client goes through
//! `QuizApi`.

mod http;
mod memory;
mod wire;

use async_trait::async_trait;
use quiz_core::{QuestionDetail, QuestionId, QuestionStatus, StatusCounts, Verdict};

use crate::error::QuizApiError;

pub use http::HttpQuizApi;
pub use memory::{CallCounts, Endpoint, InMemoryQuizApi, StoredQuestion};

/// Contract of the quiz backend as consumed by the client.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Aggregate total and visible question counts.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` for transport, server or decoding failures.
    async fn status(&self) -> Result<StatusCounts, QuizApiError>;

    /// Every question with its current visibility.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` for transport, server or decoding failures.
    async fn all_questions(&self) -> Result<Vec<QuestionStatus>, QuizApiError>;

    /// Detail of one question, without its answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError::Server` when the question is unknown or not public.
    async fn question(&self, id: QuestionId) -> Result<QuestionDetail, QuizApiError>;

    /// Submit one answer and receive the verdict.
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError` for transport, server or decoding failures.
    async fn submit_answer(&self, id: QuestionId, answer: &str) -> Result<Verdict, QuizApiError>;
}
