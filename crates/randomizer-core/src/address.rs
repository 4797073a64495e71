use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// A generated postal address.
///
/// Every field except `country_code` is optional: a field is either fully
/// populated by its generation rule or left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// House or street number, e.g. `1234`, `12-34` or `57b`.
    pub house: Option<String>,
    /// Street name; may also carry the house number.
    pub street: Option<String>,
    /// Country-formatted postal code.
    pub postal_code: Option<String>,
    /// Primary locality.
    pub city: Option<String>,
    /// Secondary administrative division.
    pub county: Option<String>,
    /// First-level administrative division.
    pub state: Option<String>,
    /// Abbreviation of `state`.
    pub state_code: Option<String>,
    /// Display name of the country.
    pub country: Option<String>,
    /// ISO 3166-1 alpha-3 code of the builder that produced the record.
    pub country_code: CountryCode,
}

impl Address {
    /// Empty record for `country_code`, ready to be filled by a builder.
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            house: None,
            street: None,
            postal_code: None,
            city: None,
            county: None,
            state: None,
            state_code: None,
            country: None,
            country_code,
        }
    }
}
