use dioxus::prelude::*;
use quiz_core::{QuestionId, QuestionPanel};

use crate::vm::{map_notice, map_option_buttons};

#[component]
pub fn QuestionPanelView(
    panel: QuestionPanel,
    on_answer: EventHandler<(QuestionId, String)>,
) -> Element {
    if !panel.visible {
        return rsx! {
            section { class: "question-panel question-panel--empty",
                p { "Pick an open question from the list." }
            }
        };
    }

    let notice = panel.notice.as_ref().map(map_notice);
    let options = map_option_buttons(&panel)
        .into_iter()
        .enumerate()
        .map(move |(index, option)| {
            let question = option.question;
            let answer = option.label.clone();
            rsx! {
                button {
                    key: "{index}",
                    class: "btn option-btn",
                    r#type: "button",
                    disabled: !option.enabled,
                    onclick: move |_| on_answer.call((question, answer.clone())),
                    "{option.label}"
                }
            }
        });

    rsx! {
        section { class: "question-panel",
            h3 { class: "question-label", "{panel.label}" }
            if let Some(text) = panel.text.as_ref() {
                p { class: "question-text", "{text}" }
            }
            if let Some(image) = panel.image.as_ref() {
                img {
                    class: "question-image",
                    src: "{image.url()}",
                    alt: "{image.name()}",
                }
            }
            div { class: "question-options", {options} }
            if let Some(notice) = notice {
                p { class: "{notice.class}", "{notice.text}" }
            }
        }
    }
}
