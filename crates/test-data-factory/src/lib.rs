//! Synthetic test data for manual and automated QA.
//!
//! This crate generates throwaway data for exercising input forms and
//! validation code. Nothing it produces belongs to a real person or account.
//!
//! # Overview
//!
//! Four independent generators, none of which touches shared mutable state:
//!
//! - [`generate_identity`]: localized full name, single-line address and
//!   phone number (`ru` or `en`; anything else falls back to `ru`)
//! - [`generate_card`]: 16-digit card number with a valid Luhn check digit,
//!   brand, expiry and CVV
//! - [`list_boundary_entries`]: fixed catalog of length, injection, Unicode
//!   and control-character probes
//! - [`generate_temp_email`]: random local part at a disposable-mail domain
//!
//! Each generator has a `*_with_rng` twin that takes an explicit RNG, so
//! seeded runs are reproducible. [`presentation`] renders records as chat
//! Markdown and [`factory_cli`] wraps everything in a command-line front end.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use test_data_factory::{Locale, generate_card_with_rng, generate_identity, is_luhn_valid};
//!
//! let identity = generate_identity("fr");
//! assert_eq!(identity.locale, Locale::Ru);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let card = generate_card_with_rng(&mut rng);
//! assert!(is_luhn_valid(&card.number));
//! ```

mod boundary;
mod card;
mod email;
mod error;
pub mod factory_cli;
mod identity;
mod locale;
mod luhn;
pub mod presentation;
pub mod settings;

pub use boundary::{
    BoundaryEntry, BoundaryKind, LENGTH_LIMIT_PROBE_LEN, LONG_STRING_PROBE_LEN, boundary_entry,
    list_boundary_entries,
};
pub use card::{CardBrand, CardRecord, generate_card, generate_card_with_rng};
pub use email::{
    DisposableDomain, LOCAL_PART_LEN, TempEmailRecord, generate_temp_email,
    generate_temp_email_with_rng,
};
pub use error::SettingsError;
pub use identity::{
    EnglishProvider, IdentityGenerator, IdentityProvider, IdentityRecord, RussianProvider,
    generate_identity, generate_identity_with_rng,
};
pub use locale::Locale;
pub use luhn::{is_luhn_valid, luhn_check_digit};
