/// Maximum number of digits in a house number.
pub const NUM_HOUSE_DIGITS: u32 = 8;
/// Chance that a house number ends with a letter.
pub const HOUSE_APPEND_LETTER_PERCENT: u32 = 5;
/// Chance that a house number of three or more digits gets a hyphen.
pub const HOUSE_INSERT_HYPHEN_PERCENT: u32 = 5;
/// Chance that the house number is also spliced into the street.
pub const INCLUDE_HOUSE_IN_STREET_PERCENT: u32 = 20;
pub const STATE_PERCENT: u32 = 50;
pub const STATE_CODE_PERCENT: u32 = 50;
pub const COUNTRY_PERCENT: u32 = 50;

/// Probabilities and bounds consulted by the field generators.
///
/// The service always runs with [`GenerationSettings::default`]; other values
/// are only constructed by tests that need a gate forced open or shut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub max_house_digits: u32,
    pub house_append_letter_percent: u32,
    pub house_insert_hyphen_percent: u32,
    pub include_house_in_street_percent: u32,
    pub state_percent: u32,
    pub state_code_percent: u32,
    pub country_percent: u32,
}

impl GenerationSettings {
    pub const DEFAULT: Self = Self {
        max_house_digits: NUM_HOUSE_DIGITS,
        house_append_letter_percent: HOUSE_APPEND_LETTER_PERCENT,
        house_insert_hyphen_percent: HOUSE_INSERT_HYPHEN_PERCENT,
        include_house_in_street_percent: INCLUDE_HOUSE_IN_STREET_PERCENT,
        state_percent: STATE_PERCENT,
        state_code_percent: STATE_CODE_PERCENT,
        country_percent: COUNTRY_PERCENT,
    };

    /// Every optional field emitted, every decoration applied.
    pub const ALWAYS: Self = Self {
        max_house_digits: NUM_HOUSE_DIGITS,
        house_append_letter_percent: 100,
        house_insert_hyphen_percent: 100,
        include_house_in_street_percent: 100,
        state_percent: 100,
        state_code_percent: 100,
        country_percent: 100,
    };

    /// No optional field emitted, no decoration applied.
    pub const NEVER: Self = Self {
        max_house_digits: NUM_HOUSE_DIGITS,
        house_append_letter_percent: 0,
        house_insert_hyphen_percent: 0,
        include_house_in_street_percent: 0,
        state_percent: 0,
        state_code_percent: 0,
        country_percent: 0,
    };
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
