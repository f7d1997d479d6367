use quiz_core::QuizScreen;
use services::QuizController;

/// Shared handles the views pull from the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    controller: QuizController,
    poll_in_background: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller,
            poll_in_background: true,
        }
    }

    /// Skip the periodic poll; only the start-up sync and user actions
    /// reach the backend.
    #[must_use]
    pub fn without_background_polling(mut self) -> Self {
        self.poll_in_background = false;
        self
    }

    #[must_use]
    pub fn controller(&self) -> QuizController {
        self.controller.clone()
    }

    #[must_use]
    pub fn polls_in_background(&self) -> bool {
        self.poll_in_background
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        self.controller.screen()
    }
}

// This context is provided by the application composition root (`crates/app`).

#[must_use]
pub fn build_app_context(controller: QuizController) -> AppContext {
    AppContext::new(controller)
}
