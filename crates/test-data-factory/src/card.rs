//! Fake payment card generation.
//!
//! Card numbers are 15 uniform random digits followed by a Luhn check digit,
//! so they pass format validation in the system under test while belonging
//! to no issuer.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::luhn::luhn_check_digit;

/// Number of random digits drawn before the check digit.
const PAYLOAD_DIGITS: usize = 15;

/// Digits per space-separated group in the formatted number.
const GROUP_SIZE: usize = 4;

/// Inclusive two-digit expiry year range.
const EXPIRY_YEARS: std::ops::RangeInclusive<u8> = 23..=30;

/// Card brand label attached to a generated number.
///
/// The label is cosmetic: the number is not tied to the brand's IIN range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardBrand {
    /// Visa.
    Visa,
    /// Mastercard.
    MasterCard,
    /// Russian national payment system.
    Mir,
}

impl CardBrand {
    /// Every brand the generator can pick.
    pub const ALL: [Self; 3] = [Self::Visa, Self::MasterCard, Self::Mir];

    /// Display name of the brand.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Mir => "Mir",
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..3_u8) {
            0 => Self::Visa,
            1 => Self::MasterCard,
            _ => Self::Mir,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated test card.
///
/// # Example
///
/// ```
/// use test_data_factory::{generate_card, is_luhn_valid};
///
/// let card = generate_card();
/// assert!(is_luhn_valid(&card.number));
/// assert_eq!(card.cvv.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    /// Sixteen digits in four space-separated groups of four.
    pub number: String,
    /// Brand label.
    pub brand: CardBrand,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// Three zero-padded digits.
    pub cvv: String,
}

impl CardRecord {
    /// Card number with the group separators removed.
    #[must_use]
    pub fn digits(&self) -> String {
        self.number.chars().filter(char::is_ascii_digit).collect()
    }
}

/// Generates a card using the thread-local random source.
#[must_use]
pub fn generate_card() -> CardRecord {
    generate_card_with_rng(&mut rand::rng())
}

/// Generates a card from the supplied random source.
///
/// The same seeded RNG state always yields the same card.
pub fn generate_card_with_rng<R: Rng + ?Sized>(rng: &mut R) -> CardRecord {
    let mut digits: Vec<u8> = (0..PAYLOAD_DIGITS)
        .map(|_| rng.random_range(0..=9_u8))
        .collect();
    digits.push(luhn_check_digit(&digits));

    let number = format_number(&digits);
    let brand = CardBrand::random(rng);
    let month = rng.random_range(1..=12_u8);
    let year = rng.random_range(EXPIRY_YEARS);
    let cvv = rng.random_range(0..=999_u16);

    debug!(brand = %brand, "generated test card");

    CardRecord {
        number,
        brand,
        expiry: format!("{month:02}/{year:02}"),
        cvv: format!("{cvv:03}"),
    }
}

/// Renders digits as `DDDD DDDD DDDD DDDD`.
fn format_number(digits: &[u8]) -> String {
    digits
        .chunks(GROUP_SIZE)
        .map(|group| group.iter().map(|d| char::from(b'0' + d)).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::luhn::is_luhn_valid;

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2026)
    }

    #[rstest]
    fn hundred_cards_pass_luhn(mut rng: ChaCha8Rng) {
        for _ in 0..100 {
            let card = generate_card_with_rng(&mut rng);
            assert!(is_luhn_valid(&card.number), "invalid: {}", card.number);
            assert_eq!(card.digits().len(), 16);
        }
    }

    #[rstest]
    fn number_has_four_groups_of_four(mut rng: ChaCha8Rng) {
        let card = generate_card_with_rng(&mut rng);
        let groups: Vec<&str> = card.number.split(' ').collect();
        assert_eq!(groups.len(), 4);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[rstest]
    fn expiry_and_cvv_stay_in_range(mut rng: ChaCha8Rng) {
        for _ in 0..200 {
            let card = generate_card_with_rng(&mut rng);
            let (month_text, year_text) = card.expiry.split_once('/').expect("slash separator");
            assert_eq!(month_text.len(), 2);
            assert_eq!(year_text.len(), 2);
            let month: u8 = month_text.parse().expect("numeric month");
            let year: u8 = year_text.parse().expect("numeric year");
            assert!((1..=12).contains(&month), "month {month}");
            assert!((23..=30).contains(&year), "year {year}");
            assert_eq!(card.cvv.len(), 3);
            assert!(card.cvv.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[rstest]
    fn all_brands_appear(mut rng: ChaCha8Rng) {
        let brands: std::collections::HashSet<CardBrand> = (0..100)
            .map(|_| generate_card_with_rng(&mut rng).brand)
            .collect();
        assert_eq!(brands.len(), CardBrand::ALL.len());
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let first = generate_card_with_rng(&mut ChaCha8Rng::seed_from_u64(7));
        let second = generate_card_with_rng(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn default_source_produces_valid_cards() {
        let card = generate_card();
        assert!(is_luhn_valid(&card.number));
    }

    #[test]
    fn brand_serializes_by_name() {
        let json = serde_json::to_string(&CardBrand::MasterCard).expect("serialize");
        assert_eq!(json, "\"MasterCard\"");
    }

    #[test]
    fn format_number_groups_digits() {
        let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(format_number(&digits), "4111 1111 1111 1111");
    }
}
