#![forbid(unsafe_code)]

pub mod list;
pub mod model;
pub mod screen;
pub mod session;

pub use list::{ListItemState, QuestionListItem, question_label, render_question_list};
pub use model::{
    ImageError, ImageRef, QuestionDetail, QuestionId, QuestionIdError, QuestionPhase,
    QuestionStatus, StatusCounts, Verdict,
};
pub use screen::{Notice, NoticeTone, OptionControl, QuestionPanel, QuizScreen, progress_label};
pub use session::SessionState;
