use std::collections::BTreeSet;

use crate::model::{QuestionId, StatusCounts};

/// Session-local answering facts.
///
/// Correct answers only ever grow. The cached counts are display-only and are
/// replaced wholesale by each applied poll; decisions that depend on
/// visibility must read the server again instead of trusting them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    correct_answers: BTreeSet<QuestionId>,
    counts: Option<StatusCounts>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a correct verdict. Returns `false` if `id` was already recorded.
    pub fn record_correct(&mut self, id: QuestionId) -> bool {
        self.correct_answers.insert(id)
    }

    #[must_use]
    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.correct_answers.contains(&id)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_answers.len()
    }

    pub fn correct_answers(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.correct_answers.iter().copied()
    }

    /// Replace the cached counts with the latest applied poll.
    pub fn cache_counts(&mut self, counts: StatusCounts) {
        self.counts = Some(counts);
    }

    /// Counts from the latest applied poll, `None` before the first one.
    #[must_use]
    pub fn cached_counts(&self) -> Option<StatusCounts> {
        self.counts
    }

    /// Whether `visible` questions are all answered in this session.
    ///
    /// Callers pass a freshly fetched visible count.
    #[must_use]
    pub fn clears(&self, visible: u32) -> bool {
        visible > 0 && usize::try_from(visible).is_ok_and(|v| v == self.correct_answers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(raw: u64) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    #[test]
    fn starts_empty_without_counts() {
        let state = SessionState::new();
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.cached_counts(), None);
    }

    #[test]
    fn record_correct_is_idempotent() {
        let mut state = SessionState::new();
        assert!(state.record_correct(qid(1)));
        assert!(!state.record_correct(qid(1)));
        assert_eq!(state.correct_count(), 1);
        assert!(state.is_answered(qid(1)));
        assert!(!state.is_answered(qid(2)));
    }

    #[test]
    fn caching_counts_never_touches_answers() {
        let mut state = SessionState::new();
        state.record_correct(qid(2));
        state.cache_counts(StatusCounts {
            total: 3,
            visible: 0,
        });
        assert!(state.is_answered(qid(2)));
        assert_eq!(
            state.cached_counts(),
            Some(StatusCounts {
                total: 3,
                visible: 0
            })
        );
    }

    #[test]
    fn clears_requires_positive_matching_count() {
        let mut state = SessionState::new();
        assert!(!state.clears(0));
        state.record_correct(qid(1));
        assert!(state.clears(1));
        assert!(!state.clears(2));
        state.record_correct(qid(2));
        assert!(state.clears(2));
    }
}
