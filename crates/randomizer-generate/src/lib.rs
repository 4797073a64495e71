//! Address generation engine for the randomizer.
//!
//! Word lists are loaded once into an immutable [`WordListStore`]; the
//! [`AddressFactory`] dispatches to one builder per country, threading a
//! [`RandomSource`] through every stochastic decision.

pub mod assets;
pub mod builders;
pub mod errors;
pub mod factory;
pub mod fields;
pub mod random;
pub mod settings;
pub mod wordlists;

pub use builders::CountryBuilder;
pub use errors::GenerationError;
pub use factory::AddressFactory;
pub use random::RandomSource;
pub use settings::GenerationSettings;
pub use wordlists::{WordList, WordListKey, WordListStore};
