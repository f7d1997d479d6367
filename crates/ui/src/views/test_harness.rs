use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuestionId;
use services::{ClientConfig, InMemoryQuizApi, QuizController, StoredQuestion};

use crate::context::{AppContext, build_app_context};
use crate::views::QuizView;

#[derive(Props, Clone)]
struct QuizHarnessProps {
    context: AppContext,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    rsx! { QuizView {} }
}

pub fn qid(raw: u64) -> QuestionId {
    QuestionId::new(raw).unwrap()
}

/// Three questions, the first two public.
pub fn seeded_api() -> InMemoryQuizApi {
    let api = InMemoryQuizApi::new();
    api.insert(
        qid(1),
        StoredQuestion::new("Capital of Japan?", &["Tokyo", "Osaka", "Kyoto"], "Tokyo")
            .with_image("tokyo.png")
            .public(true),
    );
    api.insert(
        qid(2),
        StoredQuestion::new("2 + 2?", &["3", "4", "5"], "4").public(true),
    );
    api.insert(
        qid(3),
        StoredQuestion::new("Largest ocean?", &["Atlantic", "Pacific"], "Pacific"),
    );
    api
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryQuizApi,
    pub controller: QuizController,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until the sync futures have had a chance to publish.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(api: InMemoryQuizApi) -> ViewHarness {
    let controller = QuizController::new(Arc::new(api.clone()), &ClientConfig::default());
    let context = build_app_context(controller.clone()).without_background_polling();
    let dom = VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { context });
    ViewHarness {
        dom,
        api,
        controller,
    }
}
