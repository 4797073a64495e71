use std::sync::Arc;

use randomizer_core::{Address, CountryCode};

use crate::builders::CountryBuilder;
use crate::errors::GenerationError;
use crate::random::RandomSource;
use crate::settings::GenerationSettings;
use crate::wordlists::{WordListKey, WordListStore};

/// Dispatches address requests to the country builders.
#[derive(Debug, Clone)]
pub struct AddressFactory {
    store: Arc<WordListStore>,
    settings: GenerationSettings,
}

impl AddressFactory {
    pub fn new(store: Arc<WordListStore>, settings: GenerationSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &WordListStore {
        &self.store
    }

    /// Builds an address for `country`, or for a uniformly chosen implemented
    /// country when none is given.
    ///
    /// The caller is expected to have validated `country` against
    /// [`WordListStore::implemented_countries`]; a code without a builder is an
    /// internal error.
    pub fn create_address(
        &self,
        country: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Result<Address, GenerationError> {
        let Some(country) = country else {
            let picked = self
                .store
                .random_entry(WordListKey::ImplementedCountries, rng)?
                .to_string();
            return self.create_address(Some(&picked), rng);
        };

        tracing::debug!(event = "country_selected", country = %country);
        let Some(code) = CountryCode::parse(country) else {
            tracing::error!(
                event = "country_unhandled",
                country = %country,
                "country passed validation but has no builder"
            );
            return Err(GenerationError::UnhandledCountry(country.to_string()));
        };

        CountryBuilder::for_country(code).build(&self.store, &self.settings, rng)
    }
}
