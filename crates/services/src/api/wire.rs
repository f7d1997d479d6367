use quiz_core::{ImageRef, QuestionDetail, QuestionId, QuestionStatus, StatusCounts, Verdict};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::QuizApiError;

#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    total_questions: u32,
    /// Count of currently visible questions.
    unlocked_question: u32,
}

impl From<StatusBody> for StatusCounts {
    fn from(body: StatusBody) -> Self {
        Self {
            total: body.total_questions,
            visible: body.unlocked_question,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionsBody {
    pub questions: Vec<QuestionStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionBody {
    question: String,
    options: Vec<String>,
    #[serde(default)]
    image: Option<String>,
}

impl QuestionBody {
    pub(crate) fn into_detail(
        self,
        id: QuestionId,
        asset_root: &Url,
    ) -> Result<QuestionDetail, QuizApiError> {
        let image = self
            .image
            .filter(|name| !name.trim().is_empty())
            .map(|name| ImageRef::resolve(asset_root, &name))
            .transpose()
            .map_err(|err| QuizApiError::Decode(err.to_string()))?;
        Ok(QuestionDetail {
            id,
            text: self.question,
            options: self.options,
            image,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerRequest<'a> {
    pub q_id: QuestionId,
    pub answer: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerBody {
    correct: bool,
}

impl From<AnswerBody> for Verdict {
    fn from(body: AnswerBody) -> Self {
        Verdict::from(body.correct)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
