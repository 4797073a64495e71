use thiserror::Error;

/// Core error type shared across randomizer crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The value is not one of the supported ISO 3166-1 alpha-3 codes.
    #[error("unknown country code: {0}")]
    UnknownCountry(String),
}

/// Convenience alias for results returned by randomizer crates.
pub type Result<T> = std::result::Result<T, Error>;
