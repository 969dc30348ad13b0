//! Disposable email address generation.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::debug;

/// Length of the generated local part.
pub const LOCAL_PART_LEN: usize = 10;

/// Alphabet for the local part: lowercase ASCII letters and digits.
const LOCAL_PART_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const NOTE: &str =
    "Это домен для временной почты. Проверьте сайт сервиса для доступа к письмам.";

/// Public temporary-inbox services used as email domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisposableDomain {
    /// `temp-mail.org`
    TempMail,
    /// `10minutemail.com`
    TenMinuteMail,
    /// `guerrillamail.com`
    GuerrillaMail,
    /// `yopmail.com`
    YopMail,
}

impl DisposableDomain {
    /// Every domain the generator can pick.
    pub const ALL: [Self; 4] = [
        Self::TempMail,
        Self::TenMinuteMail,
        Self::GuerrillaMail,
        Self::YopMail,
    ];

    /// Hostname of the service.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::TempMail => "temp-mail.org",
            Self::TenMinuteMail => "10minutemail.com",
            Self::GuerrillaMail => "guerrillamail.com",
            Self::YopMail => "yopmail.com",
        }
    }

    /// Resolves a hostname back to a known service.
    #[must_use]
    pub fn from_host(host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.host() == host)
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..4_u8) {
            0 => Self::TempMail,
            1 => Self::TenMinuteMail,
            2 => Self::GuerrillaMail,
            _ => Self::YopMail,
        }
    }
}

impl fmt::Display for DisposableDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// A generated disposable address.
///
/// # Example
///
/// ```
/// use test_data_factory::{DisposableDomain, generate_temp_email};
///
/// let record = generate_temp_email();
/// let (local, host) = record.email.split_once('@').expect("address has a domain");
/// assert_eq!(local.len(), 10);
/// assert!(DisposableDomain::from_host(host).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TempEmailRecord {
    /// `<local-part>@<domain>`.
    pub email: String,
    /// Static hint about reaching the inbox.
    pub note: &'static str,
}

impl TempEmailRecord {
    /// Text before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }

    /// Text after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.email.split_once('@').map_or("", |(_, host)| host)
    }
}

/// Generates an address using the thread-local random source.
#[must_use]
pub fn generate_temp_email() -> TempEmailRecord {
    generate_temp_email_with_rng(&mut rand::rng())
}

/// Generates an address from the supplied random source.
pub fn generate_temp_email_with_rng<R: Rng + ?Sized>(rng: &mut R) -> TempEmailRecord {
    let local: String = (0..LOCAL_PART_LEN)
        .filter_map(|_| LOCAL_PART_ALPHABET.choose(rng).copied().map(char::from))
        .collect();
    let domain = DisposableDomain::random(rng);
    debug!(domain = %domain, "generated temp email");
    TempEmailRecord {
        email: format!("{local}@{domain}"),
        note: NOTE,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn local_part_is_ten_lowercase_alphanumerics() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let record = generate_temp_email_with_rng(&mut rng);
            let local = record.local_part();
            assert_eq!(local.len(), LOCAL_PART_LEN);
            assert!(
                local
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected local part {local}"
            );
        }
    }

    #[test]
    fn domains_come_from_the_fixed_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let record = generate_temp_email_with_rng(&mut rng);
            let domain = DisposableDomain::from_host(record.domain()).expect("known domain");
            seen.insert(domain);
        }
        assert_eq!(seen.len(), DisposableDomain::ALL.len());
    }

    #[test]
    fn local_parts_vary() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let locals: HashSet<String> = (0..20)
            .map(|_| generate_temp_email_with_rng(&mut rng).local_part().to_owned())
            .collect();
        assert!(locals.len() > 1);
    }

    #[test]
    fn note_is_static() {
        assert_eq!(generate_temp_email().note, generate_temp_email().note);
    }

    #[test]
    fn unknown_host_is_rejected() {
        assert_eq!(DisposableDomain::from_host("gmail.com"), None);
        assert_eq!(
            DisposableDomain::from_host("yopmail.com"),
            Some(DisposableDomain::YopMail)
        );
    }
}
