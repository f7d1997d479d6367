//! Single owner of the client's mutable state.
//!
//! All components share one `QuizStore`. Updates run as short synchronous
//! closures and are never held across an await, so interleaving only happens
//! between whole updates.

use std::collections::BTreeSet;
use std::sync::Arc;

use quiz_core::{
    Notice, QuestionId, QuestionPhase, QuestionStatus, QuizScreen, SessionState,
    StatusCounts, progress_label, render_question_list,
};
use tokio::sync::watch;

/// A pending re-enable of the option controls after an incorrect verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    pub question: QuestionId,
    pub token: u64,
}

#[derive(Debug, Clone, Default)]
pub struct QuizState {
    pub session: SessionState,
    pub questions: Vec<QuestionStatus>,
    pub screen: QuizScreen,
    in_flight: BTreeSet<QuestionId>,
    cooldown: Option<Cooldown>,
    cooldown_seq: u64,
    applied_counts_seq: u64,
    applied_list_seq: u64,
    load_seq: u64,
}

impl QuizState {
    /// Rebuild the list and progress line from the latest applied facts.
    pub fn rerender(&mut self) {
        self.screen.list = render_question_list(&self.questions, &self.session);
        self.screen.progress = self
            .session
            .cached_counts()
            .map(|counts| progress_label(counts, self.session.correct_count()));
    }

    /// Apply polled counts unless a newer poll already did. Returns whether
    /// they were applied.
    pub fn apply_counts(&mut self, seq: u64, counts: StatusCounts) -> bool {
        if seq <= self.applied_counts_seq {
            return false;
        }
        self.applied_counts_seq = seq;
        self.session.cache_counts(counts);
        self.rerender();
        true
    }

    /// Apply a polled question list unless a newer poll already did.
    pub fn apply_questions(&mut self, seq: u64, questions: Vec<QuestionStatus>) -> bool {
        if seq <= self.applied_list_seq {
            return false;
        }
        self.applied_list_seq = seq;
        self.questions = questions;
        self.rerender();
        true
    }

    /// Issue a load ticket; only the most recent ticket may update the panel.
    pub fn issue_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    #[must_use]
    pub fn is_current_load(&self, ticket: u64) -> bool {
        self.load_seq == ticket
    }

    /// Mark `id` as awaiting a verdict. Returns `false` if it already is.
    pub fn begin_submission(&mut self, id: QuestionId) -> bool {
        self.in_flight.insert(id)
    }

    pub fn end_submission(&mut self, id: QuestionId) {
        self.in_flight.remove(&id);
    }

    /// Start a cooldown for `id`, superseding any pending one.
    pub fn start_cooldown(&mut self, id: QuestionId) -> Cooldown {
        self.cooldown_seq += 1;
        let cooldown = Cooldown {
            question: id,
            token: self.cooldown_seq,
        };
        self.cooldown = Some(cooldown);
        cooldown
    }

    /// Finish `cooldown` if it is still the governing one: re-enable the
    /// options and clear the failure notice when the panel still shows its
    /// question. Returns whether anything was re-enabled.
    pub fn finish_cooldown(&mut self, cooldown: Cooldown) -> bool {
        if self.cooldown != Some(cooldown) {
            return false;
        }
        self.cooldown = None;
        let panel = &mut self.screen.panel;
        if !panel.shows(cooldown.question) {
            return false;
        }
        panel.set_options_enabled(true);
        if panel.notice == Some(Notice::Incorrect) {
            panel.notice = None;
        }
        true
    }

    /// Drop the pending cooldown if it belongs to `id`; its timer then
    /// finishes without touching the panel.
    pub fn cancel_cooldown(&mut self, id: QuestionId) {
        if self.cooling_down(id) {
            self.cooldown = None;
        }
    }

    #[must_use]
    pub fn cooling_down(&self, id: QuestionId) -> bool {
        self.cooldown.is_some_and(|cooldown| cooldown.question == id)
    }

    /// Current lifecycle phase of `id` in this session.
    #[must_use]
    pub fn phase(&self, id: QuestionId) -> QuestionPhase {
        let is_public = self
            .questions
            .iter()
            .any(|question| question.id == id && question.is_public);
        QuestionPhase::derive(
            is_public,
            self.session.is_answered(id),
            self.in_flight.contains(&id),
            self.cooling_down(id),
        )
    }
}

/// Shared handle to `QuizState`; clones observe the same state.
#[derive(Clone)]
pub struct QuizStore {
    tx: Arc<watch::Sender<QuizState>>,
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(QuizState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn read<R>(&self, f: impl FnOnce(&QuizState) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Mutate the state and notify subscribers.
    pub fn update<R>(&self, f: impl FnOnce(&mut QuizState) -> R) -> R {
        let mut output = None;
        self.tx.send_modify(|state| output = Some(f(state)));
        match output {
            Some(output) => output,
            None => unreachable!("send_modify runs its closure exactly once"),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        self.read(|state| state.screen.clone())
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.read(|state| state.session.clone())
    }
}
