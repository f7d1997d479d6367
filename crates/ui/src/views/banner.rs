use dioxus::prelude::*;

#[component]
pub fn CompletionBanner() -> Element {
    rsx! {
        div { class: "completion-banner",
            h2 { "All questions answered!" }
            p { "Every question that is open right now has been answered correctly." }
        }
    }
}
