use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Countries the generator knows how to build addresses for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    #[serde(rename = "CAN")]
    Can,
    #[serde(rename = "MEX")]
    Mex,
    #[serde(rename = "NLD")]
    Nld,
    #[serde(rename = "USA")]
    Usa,
}

impl CountryCode {
    pub const ALL: [CountryCode; 4] = [Self::Can, Self::Mex, Self::Nld, Self::Usa];

    /// Case-insensitive lookup of an alpha-3 code. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Can => "CAN",
            Self::Mex => "MEX",
            Self::Nld => "NLD",
            Self::Usa => "USA",
        }
    }
}

impl FromStr for CountryCode {
    type Err = Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        Self::parse(value).ok_or_else(|| Error::UnknownCountry(value.to_string()))
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages backing the street, city and county word lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    English,
    French,
    Spanish,
    Dutch,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::English, Self::French, Self::Spanish, Self::Dutch];

    /// Suffix used in word-list asset names (`StreetNames_EN.txt`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::French => "FR",
            Self::Spanish => "ES",
            Self::Dutch => "NL",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
