//! One address builder per supported country.

use randomizer_core::{Address, CountryCode};

use crate::errors::GenerationError;
use crate::random::RandomSource;
use crate::settings::GenerationSettings;
use crate::wordlists::WordListStore;

pub mod canada;
pub mod mexico;
pub mod netherlands;
pub mod united_states;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountryBuilder {
    Canada,
    Mexico,
    Netherlands,
    UnitedStates,
}

impl CountryBuilder {
    pub fn for_country(country: CountryCode) -> Self {
        match country {
            CountryCode::Can => Self::Canada,
            CountryCode::Mex => Self::Mexico,
            CountryCode::Nld => Self::Netherlands,
            CountryCode::Usa => Self::UnitedStates,
        }
    }

    pub fn country_code(self) -> CountryCode {
        match self {
            Self::Canada => CountryCode::Can,
            Self::Mexico => CountryCode::Mex,
            Self::Netherlands => CountryCode::Nld,
            Self::UnitedStates => CountryCode::Usa,
        }
    }

    pub fn build(
        self,
        store: &WordListStore,
        settings: &GenerationSettings,
        rng: &mut dyn RandomSource,
    ) -> Result<Address, GenerationError> {
        let address = match self {
            Self::Canada => canada::build(store, settings, rng)?,
            Self::Mexico => mexico::build(store, settings, rng)?,
            Self::Netherlands => netherlands::build(store, settings, rng)?,
            Self::UnitedStates => united_states::build(store, settings, rng)?,
        };
        tracing::debug!(
            event = "address_generated",
            country = %self.country_code(),
            address = ?address
        );
        Ok(address)
    }
}
