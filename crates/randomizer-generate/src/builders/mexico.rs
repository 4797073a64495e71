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
    let mut address = Address::new(CountryCode::Mex);
    address.house = Some(fields::house_number(settings, rng));
    address.street = Some(fields::street_with_house(
        store,
        WordListKey::Streets(Language::Spanish),
        address.house.as_deref(),
        Splice::Append,
        settings,
        rng,
    )?);
    address.postal_code = Some(fields::five_digit_postal_code(rng));
    address.city = Some(
        store
            .random_entry(WordListKey::Cities(Language::Spanish), rng)?
            .to_string(),
    );
    address.county = Some(
        store
            .random_entry(WordListKey::Counties(Language::Spanish), rng)?
            .to_string(),
    );

    let (state, state_code) = fields::aligned_state(store, CountryCode::Mex, settings, rng)?;
    address.state = state;
    address.state_code = state_code;
    address.country = fields::optional_country_name(store, CountryCode::Mex, settings, rng)?;

    Ok(address)
}
