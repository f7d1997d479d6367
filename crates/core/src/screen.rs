//! Display model of the quiz page.
//!
//! Everything a front end needs to draw lives here as plain data; the
//! services layer mutates it and the UI only reads it.

use crate::list::{QuestionListItem, question_label};
use crate::model::{ImageRef, QuestionDetail, QuestionId, StatusCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Success,
    Failure,
}

/// Inline result/feedback message of the question panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AlreadyAnswered,
    Correct,
    Incorrect,
    /// Error text supplied by the server with a non-success status.
    Server(String),
    LoadFailed,
    SubmitFailed,
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Notice::AlreadyAnswered => "You have already answered this question correctly.",
            Notice::Correct => "Correct!",
            Notice::Incorrect => "Incorrect. You can try again in a moment.",
            Notice::Server(message) => message,
            Notice::LoadFailed => "Failed to load the question.",
            Notice::SubmitFailed => "Failed to submit your answer.",
        }
    }

    #[must_use]
    pub fn tone(&self) -> NoticeTone {
        match self {
            Notice::AlreadyAnswered => NoticeTone::Info,
            Notice::Correct => NoticeTone::Success,
            Notice::Incorrect
            | Notice::Server(_)
            | Notice::LoadFailed
            | Notice::SubmitFailed => NoticeTone::Failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    pub label: String,
    pub enabled: bool,
}

/// The single-question area: label, text, image, options and notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPanel {
    pub visible: bool,
    pub question: Option<QuestionId>,
    pub label: String,
    pub text: Option<String>,
    pub image: Option<ImageRef>,
    pub options: Vec<OptionControl>,
    pub notice: Option<Notice>,
}

impl QuestionPanel {
    /// Show only the bare label of `id` together with `notice`.
    pub fn show_bare(&mut self, id: QuestionId, notice: Notice) {
        self.visible = true;
        self.question = Some(id);
        self.label = question_label(id);
        self.text = None;
        self.image = None;
        self.options.clear();
        self.notice = Some(notice);
    }

    /// Replace the panel contents with a freshly loaded question.
    ///
    /// The image slot is replaced, never appended to, so at most one image is
    /// ever displayed.
    pub fn show_detail(&mut self, detail: QuestionDetail) {
        self.visible = true;
        self.question = Some(detail.id);
        self.label = question_label(detail.id);
        self.notice = None;
        self.image = detail.image;
        self.text = Some(detail.text);
        self.options = detail
            .options
            .into_iter()
            .map(|label| OptionControl {
                label,
                enabled: true,
            })
            .collect();
    }

    pub fn set_options_enabled(&mut self, enabled: bool) {
        for option in &mut self.options {
            option.enabled = enabled;
        }
    }

    #[must_use]
    pub fn any_option_enabled(&self) -> bool {
        self.options.iter().any(|option| option.enabled)
    }

    #[must_use]
    pub fn shows(&self, id: QuestionId) -> bool {
        self.question == Some(id)
    }
}

/// Whole-page state: list, panel, completion banner and progress line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizScreen {
    pub list: Vec<QuestionListItem>,
    pub panel: QuestionPanel,
    pub banner_visible: bool,
    pub quiz_visible: bool,
    pub progress: Option<String>,
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            panel: QuestionPanel::default(),
            banner_visible: false,
            quiz_visible: true,
            progress: None,
        }
    }
}

impl QuizScreen {
    pub fn show_completion(&mut self) {
        self.banner_visible = true;
        self.quiz_visible = false;
    }

    pub fn hide_completion(&mut self) {
        self.banner_visible = false;
        self.quiz_visible = true;
    }
}

#[must_use]
pub fn progress_label(counts: StatusCounts, correct: usize) -> String {
    format!(
        "{correct} answered of {} open ({} total)",
        counts.visible, counts.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn qid(raw: u64) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    fn detail(raw: u64, image: Option<&str>) -> QuestionDetail {
        let root = Url::parse("http://quiz.local/static/images/").unwrap();
        QuestionDetail {
            id: qid(raw),
            text: format!("What is {raw}?"),
            options: vec!["a".into(), "b".into(), "c".into()],
            image: image.map(|name| ImageRef::resolve(&root, name).unwrap()),
        }
    }

    #[test]
    fn detail_replaces_image_and_clears_notice() {
        let mut panel = QuestionPanel::default();
        panel.show_detail(detail(1, Some("one.png")));
        panel.notice = Some(Notice::Incorrect);
        panel.show_detail(detail(2, Some("two.png")));
        assert_eq!(panel.image.as_ref().map(ImageRef::name), Some("two.png"));
        assert_eq!(panel.notice, None);
        assert_eq!(panel.options.len(), 3);
        assert!(panel.options.iter().all(|option| option.enabled));

        panel.show_detail(detail(3, None));
        assert_eq!(panel.image, None);
    }

    #[test]
    fn bare_view_keeps_only_label() {
        let mut panel = QuestionPanel::default();
        panel.show_detail(detail(4, Some("four.png")));
        panel.show_bare(qid(4), Notice::Server("This question is not public yet.".into()));
        assert!(panel.visible);
        assert_eq!(panel.label, "Question 4");
        assert_eq!(panel.text, None);
        assert_eq!(panel.image, None);
        assert!(panel.options.is_empty());
        assert_eq!(
            panel.notice.as_ref().map(Notice::message),
            Some("This question is not public yet.")
        );
    }

    #[test]
    fn completion_toggles_quiz_panel() {
        let mut screen = QuizScreen::default();
        assert!(screen.quiz_visible);
        screen.show_completion();
        assert!(screen.banner_visible && !screen.quiz_visible);
        screen.hide_completion();
        assert!(!screen.banner_visible && screen.quiz_visible);
    }

    #[test]
    fn progress_label_mentions_counts() {
        let counts = StatusCounts {
            total: 3,
            visible: 2,
        };
        let label = progress_label(counts, 1);
        assert_eq!(label, "1 answered of 2 open (3 total)");
    }
}
