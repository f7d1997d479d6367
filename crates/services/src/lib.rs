#![forbid(unsafe_code)]

pub mod api;
pub mod clear;
pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod poller;
pub mod store;
pub mod submitter;

pub use api::{CallCounts, Endpoint, HttpQuizApi, InMemoryQuizApi, QuizApi, StoredQuestion};
pub use clear::{ClearConditionEvaluator, ClearOutcome};
pub use config::ClientConfig;
pub use controller::QuizController;
pub use error::{ApiErrorKind, ConfigError, QuizApiError};
pub use loader::{LoadOutcome, QuestionLoader};
pub use poller::{PollReport, RefreshOutcome, StatusPoller};
pub use store::{Cooldown, QuizState, QuizStore};
pub use submitter::{AnswerSubmitter, SubmitOutcome};
