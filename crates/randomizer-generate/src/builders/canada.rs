use randomizer_core::{Address, CountryCode, Language};

use crate::errors::GenerationError;
use crate::fields::{self, Splice};
use crate::random::RandomSource;
use crate::settings::GenerationSettings;
use crate::wordlists::{WordListKey, WordListStore};

/// Province resolved before the street so Quebec addresses read French.
pub fn build(
    store: &WordListStore,
    settings: &GenerationSettings,
    rng: &mut dyn RandomSource,
) -> Result<Address, GenerationError> {
    let mut address = Address::new(CountryCode::Can);
    address.house = Some(fields::house_number(settings, rng));

    let (state, state_code) = fields::aligned_state(store, CountryCode::Can, settings, rng)?;
    let language = if is_quebec(state.as_deref(), state_code.as_deref()) {
        Language::French
    } else {
        Language::English
    };
    address.state = state;
    address.state_code = state_code;

    address.street = Some(fields::street_with_house(
        store,
        WordListKey::Streets(language),
        address.house.as_deref(),
        Splice::Prepend,
        settings,
        rng,
    )?);
    address.city = Some(store.random_entry(WordListKey::Cities(language), rng)?.to_string());
    address.county = Some(store.random_entry(WordListKey::Counties(language), rng)?.to_string());
    address.postal_code = Some(fields::canadian_postal_code(rng));
    address.country = fields::optional_country_name(store, CountryCode::Can, settings, rng)?;

    Ok(address)
}

pub fn is_quebec(state: Option<&str>, state_code: Option<&str>) -> bool {
    state_code.is_some_and(|code| code.eq_ignore_ascii_case("QC"))
        || state.is_some_and(|name| name.eq_ignore_ascii_case("Quebec"))
}
