use std::sync::Arc;

use randomizer_generate::{AddressFactory, GenerationSettings, WordListStore};

/// Shared, read-only request state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub factory: Arc<AddressFactory>,
}

impl AppState {
    pub fn new(factory: AddressFactory) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// State over `store` with the fixed generation probabilities.
    pub fn from_store(store: WordListStore) -> Self {
        Self::new(AddressFactory::new(
            Arc::new(store),
            GenerationSettings::default(),
        ))
    }
}
