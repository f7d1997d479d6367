use quiz_core::{ListItemState, Notice, NoticeTone, QuestionId, QuestionListItem, QuestionPanel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionButtonVm {
    pub label: String,
    pub class: &'static str,
    pub enabled: bool,
    /// What a click loads; `None` for locked entries.
    pub target: Option<QuestionId>,
}

#[must_use]
pub fn map_question_buttons(list: &[QuestionListItem]) -> Vec<QuestionButtonVm> {
    list.iter()
        .map(|item| QuestionButtonVm {
            label: item.label.clone(),
            class: match item.state {
                ListItemState::Locked => "question-item question-item--locked",
                ListItemState::Open => "question-item question-item--open",
                ListItemState::Answered => "question-item question-item--answered",
            },
            enabled: item.is_enabled(),
            target: item.load_target(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub text: String,
    pub class: &'static str,
}

#[must_use]
pub fn map_notice(notice: &Notice) -> NoticeVm {
    let class = match notice.tone() {
        NoticeTone::Info => "notice notice--info",
        NoticeTone::Success => "notice notice--success",
        NoticeTone::Failure => "notice notice--failure",
    };
    NoticeVm {
        text: notice.message().to_string(),
        class,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionButtonVm {
    pub question: QuestionId,
    pub label: String,
    pub enabled: bool,
}

/// Option buttons of the panel; empty when no question is loaded.
#[must_use]
pub fn map_option_buttons(panel: &QuestionPanel) -> Vec<OptionButtonVm> {
    let Some(question) = panel.question else {
        return Vec::new();
    };
    panel
        .options
        .iter()
        .map(|option| OptionButtonVm {
            question,
            label: option.label.clone(),
            enabled: option.enabled,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{QuestionDetail, QuestionStatus, SessionState, render_question_list};

    fn qid(raw: u64) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    #[test]
    fn buttons_follow_list_state() {
        let mut session = SessionState::new();
        session.record_correct(qid(2));
        let list = render_question_list(
            &[
                QuestionStatus::new(qid(1), true),
                QuestionStatus::new(qid(2), true),
                QuestionStatus::new(qid(3), false),
            ],
            &session,
        );

        let buttons = map_question_buttons(&list);
        assert_eq!(buttons[0].class, "question-item question-item--open");
        assert_eq!(buttons[0].target, Some(qid(1)));
        assert_eq!(buttons[1].class, "question-item question-item--answered");
        assert!(buttons[1].enabled);
        assert!(!buttons[2].enabled);
        assert_eq!(buttons[2].target, None);
        assert_eq!(buttons[2].label, "Question 3");
    }

    #[test]
    fn notice_class_tracks_tone() {
        let vm = map_notice(&Notice::Server("Question not found.".into()));
        assert_eq!(vm.text, "Question not found.");
        assert_eq!(vm.class, "notice notice--failure");
        assert_eq!(map_notice(&Notice::Correct).class, "notice notice--success");
    }

    #[test]
    fn options_carry_their_question() {
        let mut panel = QuestionPanel::default();
        assert!(map_option_buttons(&panel).is_empty());

        panel.show_detail(QuestionDetail {
            id: qid(4),
            text: "?".into(),
            options: vec!["yes".into(), "no".into()],
            image: None,
        });
        panel.set_options_enabled(false);
        let options = map_option_buttons(&panel);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|option| option.question == qid(4) && !option.enabled));
    }
}
