use services::StoredQuestion;

use super::test_harness::{qid, seeded_api, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_list_after_start() {
    let mut harness = setup_view_harness(seeded_api());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for label in ["Question 1", "Question 2", "Question 3"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("question-item--locked"), "missing locked entry in {html}");
    assert!(
        html.contains("0 answered of 2 open (3 total)"),
        "missing progress in {html}"
    );
    assert!(html.contains("Pick an open question"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loaded_question() {
    let mut harness = setup_view_harness(seeded_api());
    harness.rebuild();
    harness.settle().await;

    harness.controller.load(qid(1)).await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Capital of Japan?"), "missing text in {html}");
    assert!(html.contains("static/images/tokyo.png"), "missing image in {html}");
    for option in ["Tokyo", "Osaka", "Kyoto"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_incorrect_notice() {
    let mut harness = setup_view_harness(seeded_api());
    harness.rebuild();
    harness.settle().await;

    harness.controller.load(qid(2)).await;
    harness.controller.submit(qid(2), "5").await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("notice--failure"), "missing notice class in {html}");
    assert!(html.contains("Incorrect."), "missing notice text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_swaps_quiz_for_banner() {
    let api = seeded_api();
    api.set_public(qid(2), false);
    let mut harness = setup_view_harness(api);
    harness.rebuild();
    harness.settle().await;

    harness.controller.load(qid(1)).await;
    harness.controller.submit(qid(1), "Tokyo").await;
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("All questions answered!"), "missing banner in {html}");
    assert!(!html.contains("question-list"), "quiz still shown in {html}");
    assert!(
        html.contains("1 answered of 1 open (3 total)"),
        "missing progress in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_repeated_option_labels() {
    let api = seeded_api();
    api.insert(
        qid(4),
        StoredQuestion::new("Say yes twice", &["Yes", "Yes", "No"], "Yes").public(true),
    );
    let mut harness = setup_view_harness(api);
    harness.rebuild();
    harness.settle().await;

    harness.controller.load(qid(4)).await;
    harness.settle().await;

    let html = harness.render();
    assert_eq!(html.matches("option-btn").count(), 3, "options missing in {html}");
    assert_eq!(html.matches(">Yes<").count(), 2, "repeated label dropped in {html}");
}
