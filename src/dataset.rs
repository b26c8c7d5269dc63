//! Reference data store: drug catalogs, legacy interaction notes, and the
//! structured pair dataset. Loaded once at startup, immutable afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

/// A free-text interaction note, shipped as a `[title, body]` pair.
/// Titles may carry legacy markup that is stripped at match time.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyNote(String, String);

impl LegacyNote {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self(title.into(), body.into())
    }

    pub fn title(&self) -> &str {
        &self.0
    }

    pub fn body(&self) -> &str {
        &self.1
    }
}

/// On-disk shape of one legacy note set entry: `{ "interactions": [[title, body], ...] }`.
#[derive(Debug, Deserialize)]
struct NoteSetEntry {
    interactions: Vec<LegacyNote>,
}

/// One structured interaction record. The pair is undirected: `(X, Y)`
/// describes the same relationship as `(Y, X)`.
#[derive(Debug, Clone, Deserialize)]
pub struct PairRecord {
    #[serde(rename = "drug")]
    pub substance_a: String,
    #[serde(rename = "interacting_drug")]
    pub substance_b: String,
    pub description: String,
    #[serde(default)]
    pub extended_description: Option<String>,
}

impl PairRecord {
    /// True when `name` matches either participant, ignoring case.
    pub fn mentions(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.substance_a.to_lowercase() == name || self.substance_b.to_lowercase() == name
    }

    /// True when `{a, b}` equals this record's participants as an
    /// unordered pair, ignoring case.
    pub fn links(&self, a: &str, b: &str) -> bool {
        let (a, b) = (a.to_lowercase(), b.to_lowercase());
        let (rec_a, rec_b) = (
            self.substance_a.to_lowercase(),
            self.substance_b.to_lowercase(),
        );
        (rec_a == a && rec_b == b) || (rec_a == b && rec_b == a)
    }
}

/// Locations of the four JSON documents the reference data ships as.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    /// Primary catalog: opaque id -> display name.
    pub primary_catalog: PathBuf,
    /// Legacy note sets, keyed by primary catalog id.
    pub legacy_notes: PathBuf,
    /// Secondary catalog: entries keyed by their own name. Only the
    /// display names participate in the search universe.
    pub secondary_catalog: PathBuf,
    /// Structured pair records.
    pub pair_data: PathBuf,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "dataset IO error: {e}"),
            DatasetError::Parse(e) => write!(f, "dataset parse error: {e}"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Parse(e)
    }
}

/// Immutable view over the merged reference data.
///
/// Catalog and note maps are kept id-sorted so every query walks them in
/// a stable order regardless of how the JSON was keyed on disk.
pub struct ReferenceStore {
    primary_catalog: BTreeMap<String, String>,
    notes: BTreeMap<String, Vec<LegacyNote>>,
    pairs: Vec<PairRecord>,
    /// Sorted, deduplicated display names: primary ∪ secondary catalog.
    name_universe: Vec<String>,
}

impl ReferenceStore {
    /// Build a store from already-parsed parts. Test fixtures and shells
    /// that embed their data use this directly.
    pub fn from_parts(
        primary_catalog: BTreeMap<String, String>,
        secondary_catalog: BTreeMap<String, String>,
        notes: BTreeMap<String, Vec<LegacyNote>>,
        pairs: Vec<PairRecord>,
    ) -> Self {
        let name_universe: Vec<String> = primary_catalog
            .values()
            .chain(secondary_catalog.values())
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        Self {
            primary_catalog,
            notes,
            pairs,
            name_universe,
        }
    }

    /// Load the four JSON documents from disk.
    pub fn load(paths: &DatasetPaths) -> Result<Self, DatasetError> {
        let primary: BTreeMap<String, String> = read_json(&paths.primary_catalog)?;
        let secondary: BTreeMap<String, String> = read_json(&paths.secondary_catalog)?;
        let note_sets: BTreeMap<String, NoteSetEntry> = read_json(&paths.legacy_notes)?;
        let pairs: Vec<PairRecord> = read_json(&paths.pair_data)?;

        let notes = note_sets
            .into_iter()
            .map(|(id, entry)| (id, entry.interactions))
            .collect();

        let store = Self::from_parts(primary, secondary, notes, pairs);
        info!(
            catalog_entries = store.primary_catalog.len(),
            note_sets = store.notes.len(),
            pair_records = store.pairs.len(),
            universe_names = store.name_universe.len(),
            "reference_data_loaded"
        );
        Ok(store)
    }

    /// A store over no data. Every query resolves to empty results.
    pub fn empty() -> Self {
        Self::from_parts(
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            Vec::new(),
        )
    }

    /// Primary catalog ids whose display name equals `name` exactly
    /// (case-sensitive), in id order. One name may map to several ids.
    pub fn ids_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.primary_catalog
            .iter()
            .filter(move |(_, n)| n.as_str() == name)
            .map(|(id, _)| id.as_str())
    }

    /// Legacy notes attached to a catalog id. An unknown id has no notes.
    pub fn notes_for(&self, id: &str) -> &[LegacyNote] {
        self.notes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The pair dataset, in shipped order.
    pub fn pairs(&self) -> &[PairRecord] {
        &self.pairs
    }

    /// All known display names, sorted ascending with duplicates collapsed.
    pub fn name_universe(&self) -> &[String] {
        &self.name_universe
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
