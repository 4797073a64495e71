use randomizer_core::{Address, CountryCode, Language};

use crate::errors::GenerationError;
use crate::fields::{self, Splice};
use crate::random::RandomSource;
use crate::settings::GenerationSettings;
use crate::wordlists::{WordListKey, WordListStore};

pub fn build(
    store: &WordListStore,
    settings: &GenerationSettings,
    rng: &mut dyn RandomSource,
) -> Result<Address, GenerationError> {
    let mut address = Address::new(CountryCode::Nld);
    address.house = Some(fields::house_number(settings, rng));
    address.street = Some(fields::street_with_house(
        store,
        WordListKey::Streets(Language::Dutch),
        address.house.as_deref(),
        Splice::Append,
        settings,
        rng,
    )?);
    address.postal_code = Some(fields::dutch_postal_code(rng));
    address.city = Some(
        store
            .random_entry(WordListKey::Cities(Language::Dutch), rng)?
            .to_string(),
    );
    // No municipality level below the province: the city doubles as county.
    address.county = address.city.clone();

    let (state, state_code) = fields::aligned_state(store, CountryCode::Nld, settings, rng)?;
    address.state = state;
    address.state_code = state_code;
    address.country = fields::optional_country_name(store, CountryCode::Nld, settings, rng)?;

    Ok(address)
}
