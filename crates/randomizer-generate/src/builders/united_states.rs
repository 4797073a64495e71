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
    let mut address = Address::new(CountryCode::Usa);
    address.house = Some(fields::house_number(settings, rng));
    address.street = Some(fields::street_with_house(
        store,
        WordListKey::Streets(Language::English),
        address.house.as_deref(),
        Splice::Prepend,
        settings,
        rng,
    )?);
    address.postal_code = Some(fields::five_digit_postal_code(rng));
    address.city = Some(
        store
            .random_entry(WordListKey::Cities(Language::English), rng)?
            .to_string(),
    );
    address.county = Some(
        store
            .random_entry(WordListKey::Counties(Language::English), rng)?
            .to_string(),
    );

    let (state, state_code) = fields::aligned_state(store, CountryCode::Usa, settings, rng)?;
    address.state = state;
    address.state_code = state_code;
    address.country = fields::optional_country_name(store, CountryCode::Usa, settings, rng)?;

    Ok(address)
}
