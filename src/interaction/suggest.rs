//! Fallback suggestions: pair records involving either queried substance
//! with any partner, surfaced only when no direct interaction exists.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::dataset::ReferenceStore;

use super::SuggestedInteraction;

pub struct SuggestionEngine {
    store: Arc<ReferenceStore>,
}

impl SuggestionEngine {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self { store }
    }

    /// Every pair record mentioning `name` on either side (ignoring
    /// case), in dataset order, fields in the record's own order.
    pub fn related_to(&self, name: &str) -> Vec<SuggestedInteraction> {
        self.store
            .pairs()
            .iter()
            .filter(|rec| rec.mentions(name))
            .map(|rec| SuggestedInteraction {
                substance_a: rec.substance_a.clone(),
                substance_b: rec.substance_b.clone(),
                description: rec.description.clone(),
                extended_description: rec.extended_description.clone(),
            })
            .collect()
    }

    /// Records related to either name: `name_a`'s matches first, then
    /// `name_b`'s, deduplicated keeping the first occurrence. Entries are
    /// duplicates only when their `(substance_a, substance_b)` pairs match
    /// positionally, so distinct `(X, Y)` and `(Y, X)` records both
    /// survive.
    pub fn suggest(&self, name_a: &str, name_b: &str) -> Vec<SuggestedInteraction> {
        let mut combined = self.related_to(name_a);
        combined.extend(self.related_to(name_b));

        let mut seen = HashSet::new();
        combined.retain(|s| seen.insert((s.substance_a.clone(), s.substance_b.clone())));

        debug!(
            name_a,
            name_b,
            count = combined.len(),
            "suggestions_collected"
        );
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PairRecord;
    use std::collections::BTreeMap;

    fn record(a: &str, b: &str, description: &str) -> PairRecord {
        PairRecord {
            substance_a: a.to_string(),
            substance_b: b.to_string(),
            description: description.to_string(),
            extended_description: None,
        }
    }

    fn engine_with(pairs: Vec<PairRecord>) -> SuggestionEngine {
        SuggestionEngine::new(Arc::new(ReferenceStore::from_parts(
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            pairs,
        )))
    }

    #[test]
    fn related_to_finds_either_side() {
        let engine = engine_with(vec![
            record("Metformin", "Alcohol", "Lactic acidosis risk"),
            record("Iron", "Metformin", "Absorption change"),
            record("Vitamin C", "Iron", "Improves absorption"),
        ]);
        let related = engine.related_to("metformin");
        assert_eq!(related.len(), 2);
        // Record field order is preserved, not the query name.
        assert_eq!(related[0].substance_a, "Metformin");
        assert_eq!(related[1].substance_a, "Iron");
        assert_eq!(related[1].substance_b, "Metformin");
    }

    #[test]
    fn suggest_concatenates_first_name_first() {
        let engine = engine_with(vec![
            record("Metformin", "Alcohol", "Lactic acidosis risk"),
            record("Vitamin C", "Iron", "Improves absorption"),
        ]);
        let suggestions = engine.suggest("Metformin", "Vitamin C");
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].substance_a, "Metformin");
        assert_eq!(suggestions[1].substance_a, "Vitamin C");
    }

    #[test]
    fn shared_record_appears_once() {
        // One record mentioning both query names is reached twice and
        // must collapse to its first occurrence.
        let engine = engine_with(vec![record("Metformin", "Vitamin C", "Shared")]);
        let suggestions = engine.suggest("Metformin", "Vitamin C");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].description, "Shared");
    }

    #[test]
    fn mirrored_records_are_not_merged() {
        // Dedup compares the pair positionally: (X, Y) and (Y, X) from
        // distinct records both survive.
        let engine = engine_with(vec![
            record("Metformin", "Iron", "Forward"),
            record("Iron", "Metformin", "Mirrored"),
        ]);
        let suggestions = engine.suggest("Metformin", "Iron");
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn unknown_name_has_no_related_records() {
        let engine = engine_with(vec![record("Metformin", "Alcohol", "x")]);
        assert!(engine.related_to("Warfarin").is_empty());
    }
}
