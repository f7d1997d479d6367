use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejected question identifier.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuestionIdError {
    #[error("question id must be positive")]
    Zero,
}

/// Stable, positive identifier of a server-owned question.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a new `QuestionId`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionIdError::Zero` for `0`.
    pub fn new(id: u64) -> Result<Self, QuestionIdError> {
        if id == 0 {
            return Err(QuestionIdError::Zero);
        }
        Ok(Self(id))
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for QuestionId {
    type Error = QuestionIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for u64 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
