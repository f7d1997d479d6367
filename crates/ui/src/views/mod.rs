mod banner;
mod question_list;
mod question_panel;
mod quiz;

pub use banner::CompletionBanner;
pub use question_list::QuestionListView;
pub use question_panel::QuestionPanelView;
pub use quiz::QuizView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
