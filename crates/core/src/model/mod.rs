mod ids;
mod question;

pub use ids::{QuestionId, QuestionIdError};
pub use question::{
    ImageError, ImageRef, QuestionDetail, QuestionPhase, QuestionStatus, StatusCounts, Verdict,
};
