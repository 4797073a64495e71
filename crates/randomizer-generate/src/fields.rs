//! Field constructors shared by the country builders.

use randomizer_core::CountryCode;

use crate::errors::GenerationError;
use crate::random::RandomSource;
use crate::settings::GenerationSettings;
use crate::wordlists::{WordListKey, WordListStore};

/// Random house number of 1..=`max_house_digits` digits.
///
/// May end with a letter, and numbers drawn with three or more digits may
/// carry one hyphen strictly inside the digit run.
pub fn house_number(settings: &GenerationSettings, rng: &mut dyn RandomSource) -> String {
    let max_digits = settings.max_house_digits.clamp(1, 18);
    let digits = rng.uniform_int(max_digits as usize) as u32 + 1;
    let upper = 10_u64.pow(digits) as usize;
    let mut house = (rng.uniform_int(upper - 1) + 1).to_string();
    let digit_len = house.len();

    if rng.percent_check(settings.house_append_letter_percent) {
        house.push(WordListStore::random_letter(rng));
    }

    if digits > 2 && rng.percent_check(settings.house_insert_hyphen_percent) && digit_len > 2 {
        let position = rng.uniform_int(digit_len - 2) + 1;
        house.insert(position, '-');
    }

    house
}

/// Where the house number lands when it is folded into the street.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Splice {
    /// `"<house> <street>"`
    Prepend,
    /// `"<street> <house>"`
    Append,
}

impl Splice {
    /// Combined street, or `None` when either part is unset.
    pub fn apply(self, house: Option<&str>, street: Option<&str>) -> Option<String> {
        let (house, street) = (house?, street?);
        Some(match self {
            Self::Prepend => format!("{house} {street}"),
            Self::Append => format!("{street} {house}"),
        })
    }
}

/// Street drawn from `key`, with the house number spliced in at
/// `include_house_in_street_percent`.
pub fn street_with_house(
    store: &WordListStore,
    key: WordListKey,
    house: Option<&str>,
    splice: Splice,
    settings: &GenerationSettings,
    rng: &mut dyn RandomSource,
) -> Result<String, GenerationError> {
    let street = store.random_entry(key, rng)?.to_string();
    if rng.percent_check(settings.include_house_in_street_percent)
        && let Some(spliced) = splice.apply(house, Some(street.as_str()))
    {
        return Ok(spliced);
    }
    Ok(street)
}

/// `A1A 1A1`: letters at 0, 2, 4 and digits at 1, 3, 5, split after the third.
pub fn canadian_postal_code(rng: &mut dyn RandomSource) -> String {
    let mut code = String::with_capacity(7);
    for position in 0..6 {
        if position == 3 {
            code.push(' ');
        }
        if position % 2 == 0 {
            code.push(WordListStore::random_letter(rng));
        } else {
            code.push(random_digit(rng));
        }
    }
    code
}

/// Zero-padded `00000`..=`99999`.
pub fn five_digit_postal_code(rng: &mut dyn RandomSource) -> String {
    format!("{:05}", rng.uniform_int(100_000))
}

/// `1234 AB`: zero-padded four digits, a space, two letters.
pub fn dutch_postal_code(rng: &mut dyn RandomSource) -> String {
    let number = rng.uniform_int(10_000);
    let first = WordListStore::random_letter(rng);
    let second = WordListStore::random_letter(rng);
    format!("{number:04} {first}{second}")
}

/// State and state code read from one index, each kept at its own probability.
pub fn aligned_state(
    store: &WordListStore,
    country: CountryCode,
    settings: &GenerationSettings,
    rng: &mut dyn RandomSource,
) -> Result<(Option<String>, Option<String>), GenerationError> {
    let index = store.random_index(WordListKey::States(country), rng)?;

    let state = if rng.percent_check(settings.state_percent) {
        Some(store.entry(WordListKey::States(country), index)?.to_string())
    } else {
        None
    };
    let state_code = if rng.percent_check(settings.state_code_percent) {
        Some(store.entry(WordListKey::StateCodes(country), index)?.to_string())
    } else {
        None
    };

    Ok((state, state_code))
}

pub fn optional_country_name(
    store: &WordListStore,
    country: CountryCode,
    settings: &GenerationSettings,
    rng: &mut dyn RandomSource,
) -> Result<Option<String>, GenerationError> {
    if !rng.percent_check(settings.country_percent) {
        return Ok(None);
    }
    let name = store.random_entry(WordListKey::CountryNames(country), rng)?;
    Ok(Some(name.to_string()))
}

fn random_digit(rng: &mut dyn RandomSource) -> char {
    char::from(b'0' + rng.uniform_int(10) as u8)
}
