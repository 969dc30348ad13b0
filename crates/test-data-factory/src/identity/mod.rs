//! Localized identity generation: full name, postal address and phone.
//!
//! The generator owns one read-only provider per supported locale. Requests
//! carry any value convertible into [`Locale`], so unsupported or non-string
//! inputs quietly resolve to the Russian provider.

mod provider;
mod ru_data;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::locale::Locale;

pub use provider::{EnglishProvider, IdentityProvider, RussianProvider};

/// A generated person.
///
/// # Example
///
/// ```
/// use test_data_factory::{Locale, generate_identity};
///
/// let identity = generate_identity("EN");
/// assert_eq!(identity.locale, Locale::En);
/// assert!(!identity.address.contains('\n'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRecord {
    /// Full personal name.
    pub full_name: String,
    /// Single-line postal address.
    pub address: String,
    /// Phone number formatted for the locale.
    pub phone: String,
    /// Locale the record was generated for; serializes as `"RU"` or `"EN"`.
    pub locale: Locale,
}

/// Holds the per-locale providers and dispatches requests to them.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityGenerator {
    ru: RussianProvider,
    en: EnglishProvider,
}

impl IdentityGenerator {
    /// Creates a generator with the built-in providers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ru: RussianProvider,
            en: EnglishProvider,
        }
    }

    /// Generates an identity for `locale` from the supplied random source.
    pub fn generate<R: Rng + ?Sized>(&self, locale: Locale, rng: &mut R) -> IdentityRecord {
        let record = match locale {
            Locale::Ru => build_record(&self.ru, locale, rng),
            Locale::En => build_record(&self.en, locale, rng),
        };
        debug!(locale = %record.locale, "generated identity");
        record
    }
}

static GENERATOR: IdentityGenerator = IdentityGenerator::new();

/// Generates an identity using the thread-local random source.
///
/// Never fails: unsupported locales resolve to [`Locale::Ru`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use test_data_factory::{Locale, generate_identity};
///
/// assert_eq!(generate_identity("Ru").locale, Locale::Ru);
/// assert_eq!(generate_identity(&json!(123)).locale, Locale::Ru);
/// assert_eq!(generate_identity(None::<&str>).locale, Locale::Ru);
/// ```
#[must_use]
pub fn generate_identity(locale: impl Into<Locale>) -> IdentityRecord {
    generate_identity_with_rng(locale, &mut rand::rng())
}

/// Generates an identity from the supplied random source.
pub fn generate_identity_with_rng<R: Rng + ?Sized>(
    locale: impl Into<Locale>,
    rng: &mut R,
) -> IdentityRecord {
    GENERATOR.generate(locale.into(), rng)
}

fn build_record<P, R>(provider: &P, locale: Locale, rng: &mut R) -> IdentityRecord
where
    P: IdentityProvider,
    R: Rng + ?Sized,
{
    let full_name = provider.full_name(rng);
    let address = single_line(&provider.address(rng));
    let phone = provider.phone(rng);
    IdentityRecord {
        full_name,
        address,
        phone,
        locale,
    }
}

/// Collapses line breaks into `", "` separators, dropping blank lines.
fn single_line(address: &str) -> String {
    address
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("1 Main St\nSpringfield, IL 62701", "1 Main St, Springfield, IL 62701")]
    #[case("a\r\nb", "a, b")]
    #[case("a\rb", "a, b")]
    #[case("a\n\nb\n", "a, b")]
    #[case("single", "single")]
    #[case("", "")]
    fn single_line_collapses_breaks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(single_line(input), expected);
    }

    #[rstest]
    #[case(Locale::Ru)]
    #[case(Locale::En)]
    fn records_are_populated(#[case] locale: Locale) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..25 {
            let record = GENERATOR.generate(locale, &mut rng);
            assert_eq!(record.locale, locale);
            assert!(!record.full_name.trim().is_empty());
            assert!(!record.address.trim().is_empty());
            assert!(!record.phone.trim().is_empty());
            assert!(!record.address.contains(['\n', '\r']));
        }
    }

    #[test]
    fn russian_phone_starts_with_country_code() {
        let record = generate_identity("ru");
        assert!(record.phone.starts_with("+7") || record.phone.contains("доб."));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!(false))]
    #[case(json!(123))]
    #[case(json!(0))]
    #[case(json!(""))]
    #[case(json!("fr"))]
    #[case(json!("invalid"))]
    fn odd_inputs_default_to_ru(#[case] input: serde_json::Value) {
        assert_eq!(generate_identity(&input).locale, Locale::Ru);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let first = generate_identity_with_rng("en", &mut ChaCha8Rng::seed_from_u64(5));
        let second = generate_identity_with_rng("en", &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(first, second);
    }

    #[test]
    fn record_serializes_with_uppercase_locale() {
        let record = IdentityRecord {
            full_name: "Ada Lovelace".to_owned(),
            address: "12 St James's Square, London".to_owned(),
            phone: "(212) 555-0100".to_owned(),
            locale: Locale::En,
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["locale"], "EN");
        assert_eq!(json["full_name"], "Ada Lovelace");
    }
}
