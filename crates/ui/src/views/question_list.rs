use dioxus::prelude::*;
use quiz_core::{QuestionId, QuestionListItem};

use crate::vm::map_question_buttons;

#[component]
pub fn QuestionListView(
    items: Vec<QuestionListItem>,
    on_select: EventHandler<QuestionId>,
) -> Element {
    let buttons = map_question_buttons(&items);
    let rows = buttons.into_iter().map(move |button| {
        let target = button.target;
        rsx! {
            li { key: "{button.label}",
                button {
                    class: "{button.class}",
                    r#type: "button",
                    disabled: !button.enabled,
                    onclick: move |_| {
                        if let Some(id) = target {
                            on_select.call(id);
                        }
                    },
                    "{button.label}"
                }
            }
        }
    });

    rsx! {
        nav { class: "question-list-pane",
            if items.is_empty() {
                p { class: "question-list-empty", "No questions yet." }
            }
            ul { class: "question-list", {rows} }
        }
    }
}
