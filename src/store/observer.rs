//! Observers attached to the dispatch pipeline.
//!
//! Intents are plain values; anything that wants to watch them (logging,
//! debugging journals) hooks in here and sees each transition after it has
//! been applied.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use super::intent::NationsIntent;
use super::state::{NationsState, SliceId};

/// Called by the store runtime once per applied intent.
pub trait DispatchObserver: Send + 'static {
    fn on_transition(&self, intent: &NationsIntent, previous: &NationsState, next: &NationsState);
}

/// Logs every dispatched intent through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn on_transition(&self, intent: &NationsIntent, previous: &NationsState, next: &NationsState) {
        let changed = previous != next;
        tracing::debug!(intent = %intent.label(), changed, "Dispatched");
        tracing::trace!(?intent, "Intent payload");
    }
}

/// One entry of a [`TransitionLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub label: String,
    pub slice: Option<SliceId>,
    pub changed: bool,
}

/// Bounded in-memory journal of recent transitions.
///
/// Clones share the same journal, so one clone can be attached to the store
/// while another is kept for inspection.
#[derive(Debug, Clone)]
pub struct TransitionLog {
    records: Arc<Mutex<VecDeque<TransitionRecord>>>,
    capacity: usize,
}

impl TransitionLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Oldest first.
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.records.lock().iter().cloned().collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.label.clone()).collect()
    }
}

impl DispatchObserver for TransitionLog {
    fn on_transition(&self, intent: &NationsIntent, previous: &NationsState, next: &NationsState) {
        if self.capacity == 0 {
            return;
        }
        let mut records = self.records.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(TransitionRecord {
            label: intent.label().to_string(),
            slice: intent.slice(),
            changed: previous != next,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CountriesListIntent;

    #[test]
    fn journal_keeps_most_recent_entries() {
        let log = TransitionLog::new(2);
        let state = NationsState::default();
        let mut changed = state.clone();
        changed.countries_list.pagination.current_page = 1;

        log.on_transition(&NationsIntent::Init, &state, &state);
        log.on_transition(
            &CountriesListIntent::PageChanged { page: 1 }.into(),
            &state,
            &changed,
        );
        log.on_transition(&CountriesListIntent::ErrorReset.into(), &changed, &changed);

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "[Countries List] Page Changed");
        assert!(records[0].changed);
        assert_eq!(records[1].slice, Some(SliceId::CountriesList));
        assert!(!records[1].changed);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let log = TransitionLog::new(0);
        let state = NationsState::default();
        log.on_transition(&NationsIntent::Init, &state, &state);
        assert!(log.records().is_empty());
    }
}
