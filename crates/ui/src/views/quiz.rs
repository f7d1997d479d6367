use dioxus::prelude::*;
use quiz_core::QuestionId;
use tracing::debug;

use crate::context::AppContext;
use crate::sync::use_quiz_screen;
use crate::views::{CompletionBanner, QuestionListView, QuestionPanelView};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_quiz_screen(&ctx);

    let loader = ctx.controller();
    let select_action = use_callback(move |id: QuestionId| {
        let controller = loader.clone();
        spawn(async move {
            let outcome = controller.load(id).await;
            debug!(question = %id, ?outcome, "question load finished");
        });
    });

    let submitter = ctx.controller();
    let answer_action = use_callback(move |(id, answer): (QuestionId, String)| {
        let controller = submitter.clone();
        spawn(async move {
            let outcome = controller.submit(id, &answer).await;
            debug!(question = %id, ?outcome, "answer submission finished");
        });
    });

    let current = screen.read().clone();
    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
                if let Some(progress) = current.progress.as_ref() {
                    p { class: "view-subtitle quiz-progress", "{progress}" }
                }
            }
            div { class: "view-divider" }
            if current.banner_visible {
                CompletionBanner {}
            }
            if current.quiz_visible {
                div { class: "quiz-body",
                    QuestionListView { items: current.list.clone(), on_select: select_action }
                    QuestionPanelView { panel: current.panel.clone(), on_answer: answer_action }
                }
            }
        }
    }
}
