//! Locale-specific sources of names, addresses and phone numbers.

use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, SecondaryAddress, StateAbbr, StreetName, ZipCode,
};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::ru_data::{
    CITIES, FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES, PATRONYMIC_STEMS,
    SETTLEMENT_PREFIXES, STREET_NAMES, STREET_TYPES,
};

/// Probability, in percent, that a Russian phone carries an extension.
const RU_EXTENSION_PERCENT: u8 = 20;

/// Probability, in percent, that a US phone carries the `+1` country code.
const EN_COUNTRY_CODE_PERCENT: u8 = 10;

/// Probability, in percent, that a US street line carries a unit number.
const EN_SECONDARY_PERCENT: u8 = 30;

/// A realistic fake-data source for one locale.
///
/// Addresses may span several lines; the identity generator flattens them.
pub trait IdentityProvider {
    /// Full personal name in the locale's customary order.
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Postal address, possibly multi-line.
    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Phone number.
    ///
    /// Providers without a locale-specific rule use a generic phone-number
    /// generator.
    fn phone<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        PhoneNumber(EN).fake_with_rng(rng)
    }
}

/// Draws an integer in `1..=100` and compares it against `percent`.
fn roll_percent<R: Rng + ?Sized>(rng: &mut R, percent: u8) -> bool {
    rng.random_range(1..=100_u8) <= percent
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Russian identities: surname, given name and patronymic; `+7` mobiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianProvider;

impl IdentityProvider for RussianProvider {
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let surname = pick(rng, LAST_NAMES);
        let stem = pick(rng, PATRONYMIC_STEMS);
        if rng.random_bool(0.5) {
            let first = pick(rng, MALE_FIRST_NAMES);
            format!("{surname} {first} {stem}ич")
        } else {
            let first = pick(rng, FEMALE_FIRST_NAMES);
            format!("{surname}а {first} {stem}на")
        }
    }

    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let prefix = pick(rng, SETTLEMENT_PREFIXES);
        let city = pick(rng, CITIES);
        let street_type = pick(rng, STREET_TYPES);
        let street = pick(rng, STREET_NAMES);
        let house = rng.random_range(1..=150_u16);
        let building = if rng.random_bool(0.3) {
            format!(" к. {}", rng.random_range(1..=9_u8))
        } else {
            String::new()
        };
        let flat = rng.random_range(1..=300_u16);
        let postcode = rng.random_range(100_000..=999_999_u32);
        format!(
            "{prefix} {city}, {street_type} {street}, д. {house}{building}, кв. {flat}\n{postcode}"
        )
    }

    fn phone<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let area = rng.random_range(900..=999_u16);
        let first = rng.random_range(100..=999_u16);
        let second = rng.random_range(10..=99_u8);
        let third = rng.random_range(10..=99_u8);
        let phone = format!("+7 ({area}) {first}-{second}-{third}");
        if roll_percent(rng, RU_EXTENSION_PERCENT) {
            let extension = rng.random_range(1000..=9999_u16);
            format!("{phone} доб. {extension}")
        } else {
            phone
        }
    }
}

/// US English identities backed by the `fake` crate's `EN` locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishProvider;

impl IdentityProvider for EnglishProvider {
    fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        format!("{first} {last}")
    }

    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let building: String = BuildingNumber(EN).fake_with_rng(rng);
        let street: String = StreetName(EN).fake_with_rng(rng);
        let mut street_line = format!("{building} {street}");
        if roll_percent(rng, EN_SECONDARY_PERCENT) {
            let secondary: String = SecondaryAddress(EN).fake_with_rng(rng);
            street_line.push(' ');
            street_line.push_str(&secondary);
        }
        let city: String = CityName(EN).fake_with_rng(rng);
        let state: String = StateAbbr(EN).fake_with_rng(rng);
        let zip: String = ZipCode(EN).fake_with_rng(rng);
        format!("{street_line}\n{city}, {state} {zip}")
    }

    fn phone<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let area = rng.random_range(200..=999_u16);
        let exchange = rng.random_range(200..=999_u16);
        let subscriber = rng.random_range(1000..=9999_u16);
        let phone = format!("({area}) {exchange}-{subscriber}");
        if roll_percent(rng, EN_COUNTRY_CODE_PERCENT) {
            format!("+1 {phone}")
        } else {
            phone
        }
    }
}
