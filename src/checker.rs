//! Check session: two substance slots re-evaluated on every change.
//! Matching needs both names; suggestions only fill in when a full query
//! found no direct interaction.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;

use crate::dataset::ReferenceStore;
use crate::interaction::matcher::InteractionMatcher;
use crate::interaction::suggest::SuggestionEngine;
use crate::interaction::{ResolvedInteraction, SuggestedInteraction};

/// Result of one recomputation. `suggestions` is only populated when both
/// names were given and `interactions` came back empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckOutcome {
    pub interactions: Vec<ResolvedInteraction>,
    pub suggestions: Vec<SuggestedInteraction>,
}

impl CheckOutcome {
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty() && self.suggestions.is_empty()
    }
}

struct Slots {
    first: String,
    second: String,
    outcome: CheckOutcome,
}

/// Holds the two query slots and the outcome derived from them. Each slot
/// change recomputes synchronously under one lock, so a reader never sees
/// an outcome mixing a stale first name with a fresh second name.
///
/// There is no caching across changes: every mutation is a full recompute
/// from the two current names.
pub struct CheckSession {
    matcher: InteractionMatcher,
    suggestions: SuggestionEngine,
    slots: Mutex<Slots>,
}

impl CheckSession {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self {
            matcher: InteractionMatcher::new(Arc::clone(&store)),
            suggestions: SuggestionEngine::new(store),
            slots: Mutex::new(Slots {
                first: String::new(),
                second: String::new(),
                outcome: CheckOutcome::default(),
            }),
        }
    }

    /// Set the first substance slot and recompute.
    pub fn set_first(&self, name: impl Into<String>) -> CheckOutcome {
        let mut slots = self.slots.lock();
        slots.first = name.into();
        self.recompute(&mut slots)
    }

    /// Set the second substance slot and recompute.
    pub fn set_second(&self, name: impl Into<String>) -> CheckOutcome {
        let mut slots = self.slots.lock();
        slots.second = name.into();
        self.recompute(&mut slots)
    }

    /// Clear both slots.
    pub fn clear(&self) -> CheckOutcome {
        let mut slots = self.slots.lock();
        slots.first.clear();
        slots.second.clear();
        self.recompute(&mut slots)
    }

    /// Snapshot of the current outcome.
    pub fn outcome(&self) -> CheckOutcome {
        self.slots.lock().outcome.clone()
    }

    /// The two current slot values.
    pub fn names(&self) -> (String, String) {
        let slots = self.slots.lock();
        (slots.first.clone(), slots.second.clone())
    }

    /// Direct access to the matcher, for shells that query outside a
    /// session.
    pub fn matcher(&self) -> &InteractionMatcher {
        &self.matcher
    }

    /// Direct access to the suggestion engine.
    pub fn suggestions(&self) -> &SuggestionEngine {
        &self.suggestions
    }

    fn recompute(&self, slots: &mut Slots) -> CheckOutcome {
        let outcome = if slots.first.is_empty() || slots.second.is_empty() {
            CheckOutcome::default()
        } else {
            let interactions = self.matcher.find_interactions(&slots.first, &slots.second);
            let suggestions = if interactions.is_empty() {
                self.suggestions.suggest(&slots.first, &slots.second)
            } else {
                Vec::new()
            };
            CheckOutcome {
                interactions,
                suggestions,
            }
        };
        info!(
            first = %slots.first,
            second = %slots.second,
            interactions = outcome.interactions.len(),
            suggestions = outcome.suggestions.len(),
            "interactions_checked"
        );
        slots.outcome = outcome.clone();
        outcome
    }
}
