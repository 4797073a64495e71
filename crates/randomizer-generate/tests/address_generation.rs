use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

use randomizer_core::{Address, CountryCode, Language};
use randomizer_generate::{
    AddressFactory, CountryBuilder, GenerationError, GenerationSettings, WordListKey,
    WordListStore,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wordlists")
}

fn fixture_store() -> WordListStore {
    WordListStore::load(fixture_dir()).expect("fixture word lists load")
}

fn factory(settings: GenerationSettings) -> AddressFactory {
    AddressFactory::new(Arc::new(fixture_store()), settings)
}

fn copy_fixtures(target: &Path) {
    for entry in fs::read_dir(fixture_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), target.join(entry.file_name())).unwrap();
    }
}

/// Street name with a spliced house number removed.
fn bare_street(address: &Address) -> String {
    let street = address.street.clone().unwrap();
    let house = address.house.clone().unwrap();
    street
        .strip_prefix(&format!("{house} "))
        .or_else(|| street.strip_suffix(&format!(" {house}")))
        .unwrap_or(&street)
        .to_string()
}

fn in_list(store: &WordListStore, key: WordListKey, value: Option<&str>) -> bool {
    value.is_some_and(|value| store.list(key).unwrap().contains(value))
}

#[test]
fn every_country_code_is_preserved() {
    let factory = factory(GenerationSettings::DEFAULT);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for country in CountryCode::ALL {
        for requested in [country.as_str().to_string(), country.as_str().to_lowercase()] {
            let address = factory.create_address(Some(&requested), &mut rng).unwrap();
            assert_eq!(address.country_code, country);
        }
    }
}

#[test]
fn postal_codes_match_country_formats() {
    let factory = factory(GenerationSettings::DEFAULT);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let patterns = [
        (CountryCode::Can, Regex::new(r"^[A-Za-z]\d[A-Za-z] \d[A-Za-z]\d$").unwrap()),
        (CountryCode::Mex, Regex::new(r"^\d{5}$").unwrap()),
        (CountryCode::Nld, Regex::new(r"^\d{4} [A-Za-z]{2}$").unwrap()),
        (CountryCode::Usa, Regex::new(r"^\d{5}$").unwrap()),
    ];
    for (country, pattern) in &patterns {
        for _ in 0..500 {
            let address = factory
                .create_address(Some(country.as_str()), &mut rng)
                .unwrap();
            let postal = address.postal_code.unwrap();
            assert!(pattern.is_match(&postal), "{country}: {postal}");
        }
    }
}

#[test]
fn house_numbers_keep_their_shape() {
    let factory = factory(GenerationSettings::ALWAYS);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let pattern = Regex::new(r"^(\d+)(?:-(\d+))?([A-Za-z])?$").unwrap();
    for _ in 0..2_000 {
        let address = factory.create_address(None, &mut rng).unwrap();
        let house = address.house.unwrap();
        let captures = pattern.captures(&house).unwrap_or_else(|| panic!("{house}"));
        let digits = format!(
            "{}{}",
            &captures[1],
            captures.get(2).map_or("", |m| m.as_str())
        );
        assert!((1..=8).contains(&digits.len()), "{house}");
        assert!(digits.parse::<u64>().unwrap() > 0, "{house}");
    }
}

#[test]
fn quebec_addresses_use_french_lists() {
    let store = fixture_store();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut french = 0;
    let mut english = 0;
    for _ in 0..2_000 {
        let address = CountryBuilder::Canada
            .build(&store, &GenerationSettings::DEFAULT, &mut rng)
            .unwrap();
        let quebec = address
            .state_code
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case("QC"))
            || address
                .state
                .as_deref()
                .is_some_and(|state| state.eq_ignore_ascii_case("Quebec"));
        let language = if quebec {
            french += 1;
            Language::French
        } else {
            english += 1;
            Language::English
        };

        let street = bare_street(&address);
        assert!(
            in_list(&store, WordListKey::Streets(language), Some(street.as_str())),
            "{street} not in {language} streets"
        );
        assert!(in_list(
            &store,
            WordListKey::Cities(language),
            address.city.as_deref()
        ));
        assert!(in_list(
            &store,
            WordListKey::Counties(language),
            address.county.as_deref()
        ));
    }
    assert!(french > 0 && english > 0);
}

#[test]
fn single_language_countries_use_their_own_lists() {
    let store = fixture_store();
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let cases = [
        (CountryCode::Mex, Language::Spanish),
        (CountryCode::Nld, Language::Dutch),
        (CountryCode::Usa, Language::English),
    ];
    for (country, language) in cases {
        for _ in 0..500 {
            let address = CountryBuilder::for_country(country)
                .build(&store, &GenerationSettings::DEFAULT, &mut rng)
                .unwrap();

            let street = bare_street(&address);
            assert!(
                in_list(&store, WordListKey::Streets(language), Some(street.as_str())),
                "{country}: {street} not in {language} streets"
            );
            assert!(
                in_list(&store, WordListKey::Cities(language), address.city.as_deref()),
                "{country}: {:?} not in {language} cities",
                address.city
            );
            let county_key = match language {
                Language::Dutch => WordListKey::Cities(Language::Dutch),
                other => WordListKey::Counties(other),
            };
            assert!(
                in_list(&store, county_key, address.county.as_deref()),
                "{country}: {:?} not in {county_key}",
                address.county
            );
        }
    }
}

#[test]
fn fixture_language_lists_are_disjoint() {
    let store = fixture_store();
    let mut owners: BTreeMap<String, Language> = BTreeMap::new();
    for language in Language::ALL {
        let mut keys = vec![WordListKey::Streets(language), WordListKey::Cities(language)];
        if language != Language::Dutch {
            keys.push(WordListKey::Counties(language));
        }
        for key in keys {
            for entry in store.list(key).unwrap().entries() {
                if let Some(previous) = owners.insert(entry.clone(), language) {
                    assert_eq!(previous, language, "{entry} appears in two languages");
                }
            }
        }
    }
}

#[test]
fn state_and_state_code_share_an_index() {
    let store = fixture_store();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for country in CountryCode::ALL {
        let states = store.list(WordListKey::States(country)).unwrap();
        let codes = store.list(WordListKey::StateCodes(country)).unwrap();
        let mut paired = 0;
        for _ in 0..1_000 {
            let address = CountryBuilder::for_country(country)
                .build(&store, &GenerationSettings::DEFAULT, &mut rng)
                .unwrap();
            if let (Some(state), Some(code)) = (&address.state, &address.state_code) {
                paired += 1;
                let state_index = states.entries().iter().position(|s| s == state);
                let code_index = codes.entries().iter().position(|c| c == code);
                assert!(state_index.is_some());
                assert_eq!(state_index, code_index, "{country}: {state} / {code}");
            }
        }
        assert!(paired > 0, "{country} never emitted both fields");
    }
}

#[test]
fn dutch_county_is_the_city() {
    let factory = factory(GenerationSettings::DEFAULT);
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..500 {
        let address = factory.create_address(Some("NLD"), &mut rng).unwrap();
        assert!(address.city.is_some());
        assert_eq!(address.county, address.city);
    }
}

#[test]
fn house_splice_direction_follows_country() {
    let factory = factory(GenerationSettings::ALWAYS);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for country in CountryCode::ALL {
        let address = factory
            .create_address(Some(country.as_str()), &mut rng)
            .unwrap();
        let house = address.house.clone().unwrap();
        let street = address.street.clone().unwrap();
        match country {
            CountryCode::Can | CountryCode::Usa => {
                assert!(street.starts_with(&format!("{house} ")), "{street}")
            }
            CountryCode::Mex | CountryCode::Nld => {
                assert!(street.ends_with(&format!(" {house}")), "{street}")
            }
        }
    }
}

#[test]
fn optional_fields_follow_their_gates() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let always = factory(GenerationSettings::ALWAYS);
    for country in CountryCode::ALL {
        let address = always
            .create_address(Some(country.as_str()), &mut rng)
            .unwrap();
        assert!(address.state.is_some());
        assert!(address.state_code.is_some());
        let country_names = always.store().list(WordListKey::CountryNames(country)).unwrap();
        assert!(country_names.contains(address.country.as_deref().unwrap()));
    }

    let never = factory(GenerationSettings::NEVER);
    for country in CountryCode::ALL {
        let address = never
            .create_address(Some(country.as_str()), &mut rng)
            .unwrap();
        assert_eq!(address.state, None);
        assert_eq!(address.state_code, None);
        assert_eq!(address.country, None);
        assert_eq!(address.street, Some(bare_street(&address)));
        assert!(address.postal_code.is_some());
        assert!(address.city.is_some());
        assert!(address.county.is_some());
    }
}

#[test]
fn unspecified_country_is_roughly_uniform() {
    let factory = factory(GenerationSettings::DEFAULT);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut counts: BTreeMap<CountryCode, usize> = BTreeMap::new();
    for _ in 0..4_000 {
        let address = factory.create_address(None, &mut rng).unwrap();
        *counts.entry(address.country_code).or_default() += 1;
    }
    assert_eq!(counts.len(), 4);
    for (country, count) in counts {
        assert!((850..1_150).contains(&count), "{country}: {count}");
    }
}

#[test]
fn unknown_country_is_an_internal_error() {
    let factory = factory(GenerationSettings::DEFAULT);
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let result = factory.create_address(Some("XYZ"), &mut rng);
    assert!(matches!(result, Err(GenerationError::UnhandledCountry(code)) if code == "XYZ"));
}

#[test]
fn advertised_country_without_builder_is_an_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixtures(dir.path());
    fs::write(dir.path().join("ImplementedCountries.txt"), "BRA\n").unwrap();

    let store = WordListStore::load(dir.path()).unwrap();
    assert!(store.is_implemented("bra"));
    let factory = AddressFactory::new(Arc::new(store), GenerationSettings::DEFAULT);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    assert!(matches!(
        factory.create_address(None, &mut rng),
        Err(GenerationError::UnhandledCountry(code)) if code == "BRA"
    ));
}

#[test]
fn missing_word_list_aborts_loading() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixtures(dir.path());
    fs::remove_file(dir.path().join("CountyNames_FR.txt")).unwrap();

    match WordListStore::load(dir.path()) {
        Err(GenerationError::MissingAsset { path }) => {
            assert!(path.ends_with("CountyNames_FR.txt"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn blank_word_list_aborts_loading() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixtures(dir.path());
    fs::write(dir.path().join("CityNames_NL.txt"), "\n  \n").unwrap();

    assert!(matches!(
        WordListStore::load(dir.path()),
        Err(GenerationError::EmptyWordList(name)) if name == "CityNames_NL.txt"
    ));
}

#[test]
fn bundled_word_lists_load_and_generate() {
    let store = WordListStore::bundled().expect("bundled word lists load");
    assert_eq!(store.implemented_countries(), ["CAN", "MEX", "NLD", "USA"]);

    let factory = AddressFactory::new(Arc::new(store), GenerationSettings::default());
    let mut rng = rand::rng();
    for country in CountryCode::ALL {
        let address = factory
            .create_address(Some(country.as_str()), &mut rng)
            .unwrap();
        assert_eq!(address.country_code, country);
    }
}
