use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use randomizer_core::{CountryCode, Language};

use crate::assets::AssetsLoader;
use crate::errors::GenerationError;
use crate::random::RandomSource;

/// Letters used for postal-code and house-number fillers.
pub const ALPHABET: [char; 52] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Identifies one word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordListKey {
    Streets(Language),
    Cities(Language),
    Counties(Language),
    States(CountryCode),
    /// Index-aligned with [`WordListKey::States`] of the same country.
    StateCodes(CountryCode),
    CountryNames(CountryCode),
    ImplementedCountries,
}

impl WordListKey {
    /// Every list the builders read. Dutch has no county list.
    pub fn required() -> Vec<WordListKey> {
        let mut keys = Vec::new();
        for language in Language::ALL {
            keys.push(Self::Streets(language));
            keys.push(Self::Cities(language));
            if language != Language::Dutch {
                keys.push(Self::Counties(language));
            }
        }
        for country in CountryCode::ALL {
            keys.push(Self::States(country));
            keys.push(Self::StateCodes(country));
            keys.push(Self::CountryNames(country));
        }
        keys.push(Self::ImplementedCountries);
        keys
    }

    pub fn file_name(self) -> String {
        match self {
            Self::Streets(language) => format!("StreetNames_{}.txt", language.suffix()),
            Self::Cities(language) => format!("CityNames_{}.txt", language.suffix()),
            Self::Counties(language) => format!("CountyNames_{}.txt", language.suffix()),
            Self::States(country) => format!("StateNames_{}.txt", country.as_str()),
            Self::StateCodes(country) => format!("StateCodes_{}.txt", country.as_str()),
            Self::CountryNames(country) => {
                format!("CountryNameVariations_{}.txt", country.as_str())
            }
            Self::ImplementedCountries => "ImplementedCountries.txt".to_string(),
        }
    }
}

impl fmt::Display for WordListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Named, ordered list of candidate strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: String,
    entries: Vec<String>,
}

impl WordList {
    pub fn new(name: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Uniform index into the list. Fails instead of drawing from an empty list.
    pub fn random_index(&self, rng: &mut dyn RandomSource) -> Result<usize, GenerationError> {
        if self.entries.is_empty() {
            return Err(GenerationError::EmptyWordList(self.name.clone()));
        }
        Ok(rng.uniform_int(self.entries.len()))
    }

    pub fn choose(&self, rng: &mut dyn RandomSource) -> Result<&str, GenerationError> {
        let index = self.random_index(rng)?;
        Ok(self.entries[index].as_str())
    }
}

/// Immutable set of word lists, loaded once at startup.
#[derive(Debug, Clone)]
pub struct WordListStore {
    lists: BTreeMap<WordListKey, WordList>,
}

impl WordListStore {
    /// Loads every required list from `root`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, GenerationError> {
        Self::load_with(&AssetsLoader::new(root.as_ref()))
    }

    /// Loads the lists shipped with this crate.
    pub fn bundled() -> Result<Self, GenerationError> {
        Self::load_with(&AssetsLoader::bundled())
    }

    pub fn load_with(loader: &AssetsLoader) -> Result<Self, GenerationError> {
        let mut lists = BTreeMap::new();
        for key in WordListKey::required() {
            let entries = loader.load_lines(&key.file_name())?;
            tracing::debug!(event = "word_list_loaded", list = %key, entries = entries.len());
            lists.insert(key, entries);
        }
        let store = Self::from_lists(lists)?;
        tracing::info!(
            event = "word_lists_loaded",
            root = %loader.root().display(),
            lists = store.lists.len(),
            implemented = ?store.implemented_countries(),
            "word lists ready"
        );
        Ok(store)
    }

    /// Builds a store from in-memory lists, applying the same checks as [`load`](Self::load).
    pub fn from_lists(lists: BTreeMap<WordListKey, Vec<String>>) -> Result<Self, GenerationError> {
        let lists: BTreeMap<WordListKey, WordList> = lists
            .into_iter()
            .map(|(key, entries)| (key, WordList::new(key.file_name(), entries)))
            .collect();

        for key in WordListKey::required() {
            match lists.get(&key) {
                None => return Err(GenerationError::MissingWordList(key.file_name())),
                Some(list) if list.is_empty() => {
                    return Err(GenerationError::EmptyWordList(key.file_name()));
                }
                Some(_) => {}
            }
        }

        for country in CountryCode::ALL {
            let states = &lists[&WordListKey::States(country)];
            let codes = &lists[&WordListKey::StateCodes(country)];
            if states.len() != codes.len() {
                return Err(GenerationError::MisalignedWordLists {
                    states: states.name().to_string(),
                    codes: codes.name().to_string(),
                    state_count: states.len(),
                    code_count: codes.len(),
                });
            }
        }

        Ok(Self { lists })
    }

    pub fn list(&self, key: WordListKey) -> Result<&WordList, GenerationError> {
        self.lists
            .get(&key)
            .ok_or_else(|| GenerationError::MissingWordList(key.file_name()))
    }

    pub fn random_entry(
        &self,
        key: WordListKey,
        rng: &mut dyn RandomSource,
    ) -> Result<&str, GenerationError> {
        self.list(key)?.choose(rng)
    }

    pub fn random_index(
        &self,
        key: WordListKey,
        rng: &mut dyn RandomSource,
    ) -> Result<usize, GenerationError> {
        self.list(key)?.random_index(rng)
    }

    pub fn entry(&self, key: WordListKey, index: usize) -> Result<&str, GenerationError> {
        let list = self.list(key)?;
        list.get(index).ok_or_else(|| {
            GenerationError::Asset(format!(
                "index {index} out of range for {} ({} entries)",
                list.name(),
                list.len()
            ))
        })
    }

    /// Country codes the service advertises, as listed in the asset.
    pub fn implemented_countries(&self) -> &[String] {
        self.lists
            .get(&WordListKey::ImplementedCountries)
            .map(WordList::entries)
            .unwrap_or(&[])
    }

    /// Case-insensitive membership in [`implemented_countries`](Self::implemented_countries).
    pub fn is_implemented(&self, code: &str) -> bool {
        let code = code.trim();
        self.implemented_countries()
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(code))
    }

    pub fn random_letter(rng: &mut dyn RandomSource) -> char {
        ALPHABET[rng.uniform_int(ALPHABET.len())]
    }
}
