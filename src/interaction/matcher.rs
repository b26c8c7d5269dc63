//! Direct interaction matching: legacy catalog notes plus structured pair
//! records, merged into one ordered result list.

use std::sync::Arc;

use tracing::debug;

use crate::dataset::ReferenceStore;

use super::markup::TagStripper;
use super::{InteractionSource, ResolvedInteraction};

/// Finds known interactions between two named substances.
///
/// The two sources use different matching strategies on purpose: catalog
/// subjects are looked up by exact (case-sensitive) display name and their
/// note titles searched case-insensitively, while pair records compare the
/// unordered name pair ignoring case. Unifying the strategies changes
/// which interactions surface.
pub struct InteractionMatcher {
    store: Arc<ReferenceStore>,
    stripper: TagStripper,
}

impl InteractionMatcher {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self {
            store,
            stripper: TagStripper::new(),
        }
    }

    /// All interactions between `name_a` and `name_b`, in source order:
    /// catalog notes with `name_a` as subject, then with `name_b` as
    /// subject, then pair records in dataset order. No deduplication.
    /// Returns nothing when either name is empty.
    pub fn find_interactions(&self, name_a: &str, name_b: &str) -> Vec<ResolvedInteraction> {
        if name_a.is_empty() || name_b.is_empty() {
            return Vec::new();
        }

        let mut found = self.catalog_side(name_a, name_b, name_a, name_b);
        found.extend(self.catalog_side(name_b, name_a, name_a, name_b));
        let catalog_hits = found.len();
        found.extend(self.pair_side(name_a, name_b));

        debug!(
            name_a,
            name_b,
            catalog_hits,
            pair_hits = found.len() - catalog_hits,
            "interactions_matched"
        );
        found
    }

    /// Notes attached to catalog entries named `subject` whose title
    /// mentions `counterpart`. Output fields always carry the query's
    /// argument order, whichever side the subject came from.
    fn catalog_side(
        &self,
        subject: &str,
        counterpart: &str,
        name_a: &str,
        name_b: &str,
    ) -> Vec<ResolvedInteraction> {
        let needle = counterpart.to_lowercase();
        let mut out = Vec::new();
        for id in self.store.ids_named(subject) {
            for note in self.store.notes_for(id) {
                if note.title().to_lowercase().contains(&needle) {
                    out.push(ResolvedInteraction {
                        source: InteractionSource::Catalog,
                        substance_a: name_a.to_string(),
                        substance_b: name_b.to_string(),
                        title: self.stripper.strip(note.title()),
                        description: note.body().to_string(),
                        extended_description: None,
                    });
                }
            }
        }
        out
    }

    /// Pair records linking the two names. The title keeps the record's
    /// own field order, not the query order.
    fn pair_side(&self, name_a: &str, name_b: &str) -> Vec<ResolvedInteraction> {
        self.store
            .pairs()
            .iter()
            .filter(|rec| rec.links(name_a, name_b))
            .map(|rec| ResolvedInteraction {
                source: InteractionSource::Pair,
                substance_a: name_a.to_string(),
                substance_b: name_b.to_string(),
                title: format!("{} + {}", rec.substance_a, rec.substance_b),
                description: rec.description.clone(),
                extended_description: rec.extended_description.clone(),
            })
            .collect()
    }
}
