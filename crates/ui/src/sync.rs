use dioxus::prelude::*;
use quiz_core::QuizScreen;
use tracing::debug;

use crate::context::AppContext;

/// Mirror the controller's screen into a signal and drive the background sync.
///
/// The first future follows the store's watch channel; the second runs the
/// start-up poll and clear check, then keeps polling on the configured
/// interval.
pub fn use_quiz_screen(ctx: &AppContext) -> Signal<QuizScreen> {
    let mut screen = use_signal(|| ctx.screen());

    let controller = ctx.controller();
    use_future(move || {
        let controller = controller.clone();
        async move {
            let mut rx = controller.subscribe();
            loop {
                let next = rx.borrow_and_update().screen.clone();
                if *screen.peek() != next {
                    screen.set(next);
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let controller = ctx.controller();
    let poll_in_background = ctx.polls_in_background();
    use_future(move || {
        let controller = controller.clone();
        async move {
            let report = controller.start().await;
            debug!(?report, "initial sync finished");
            if poll_in_background {
                controller.run_polling().await;
            }
        }
    });

    screen
}
