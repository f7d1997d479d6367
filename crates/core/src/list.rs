use crate::model::{QuestionId, QuestionStatus};
use crate::session::SessionState;

/// How one entry of the question list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItemState {
    /// Not public right now. Disabled, no handler.
    Locked,
    /// Public and not answered yet.
    Open,
    /// Public and answered correctly in this session. Still selectable.
    Answered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListItem {
    pub id: QuestionId,
    pub label: String,
    pub state: ListItemState,
}

impl QuestionListItem {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self.state, ListItemState::Locked)
    }

    /// The id a click should load, `None` for locked entries.
    #[must_use]
    pub fn load_target(&self) -> Option<QuestionId> {
        self.is_enabled().then_some(self.id)
    }
}

/// Bare label shown for a question wherever its text is not available.
#[must_use]
pub fn question_label(id: QuestionId) -> String {
    format!("Question {id}")
}

/// Project the polled question set onto the session into a fresh list.
///
/// Always a full rebuild in ascending id order. A question answered in this
/// session but no longer public is shown locked; its answer is kept.
#[must_use]
pub fn render_question_list(
    questions: &[QuestionStatus],
    session: &SessionState,
) -> Vec<QuestionListItem> {
    let mut sorted = questions.to_vec();
    sorted.sort_by_key(|question| question.id);
    sorted.dedup_by_key(|question| question.id);

    sorted
        .into_iter()
        .map(|question| {
            let state = match (question.is_public, session.is_answered(question.id)) {
                (false, _) => ListItemState::Locked,
                (true, true) => ListItemState::Answered,
                (true, false) => ListItemState::Open,
            };
            QuestionListItem {
                id: question.id,
                label: question_label(question.id),
                state,
            }
        })
        .collect()
}
