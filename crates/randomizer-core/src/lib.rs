//! Core contracts for the address randomizer.
//!
//! This crate defines the address record, the supported country and language
//! identifiers, and the error type shared by the generator and the service.

pub mod address;
pub mod country;
pub mod error;

pub use address::Address;
pub use country::{CountryCode, Language};
pub use error::{Error, Result};

/// Sentinel the service accepts in place of an absent `country` parameter.
pub const NO_COUNTRY: &str = "NO_VALUE";
