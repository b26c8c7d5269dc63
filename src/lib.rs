//! Rxcheck: drug interaction lookup engine.
//! Reconciles an id-indexed catalog carrying free-text interaction notes
//! with a structured pair dataset, and falls back to single-substance
//! suggestions when no direct interaction is known. Presentation shells
//! supply two substance names and render the structured outcome.

pub mod checker;
pub mod dataset;
pub mod interaction;

use std::sync::Arc;

use checker::CheckSession;
use dataset::{DatasetError, DatasetPaths, ReferenceStore};
use interaction::resolve::NameResolver;

pub use checker::CheckOutcome;
pub use dataset::{LegacyNote, PairRecord};
pub use interaction::{InteractionSource, ResolvedInteraction, SuggestedInteraction};

/// Engine context handed to the presentation shell: one shared reference
/// store wired into the name resolver and the check session.
pub struct Engine {
    store: Arc<ReferenceStore>,
    resolver: NameResolver,
    session: CheckSession,
}

impl Engine {
    /// Build an engine over an already-constructed store.
    pub fn new(store: ReferenceStore) -> Self {
        let store = Arc::new(store);
        Self {
            resolver: NameResolver::new(Arc::clone(&store)),
            session: CheckSession::new(Arc::clone(&store)),
            store,
        }
    }

    /// Load the reference data from disk and build the engine.
    pub fn load(paths: &DatasetPaths) -> Result<Self, DatasetError> {
        Ok(Self::new(ReferenceStore::load(paths)?))
    }

    pub fn store(&self) -> &Arc<ReferenceStore> {
        &self.store
    }

    /// Incremental name search for the shell's input fields.
    pub fn resolver(&self) -> &NameResolver {
        &self.resolver
    }

    /// The two-slot check session driven by the shell's input events.
    pub fn session(&self) -> &CheckSession {
        &self.session
    }
}

/// Install the fmt tracing subscriber. The embedding shell calls this once
/// at startup; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rxcheck=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();
}
