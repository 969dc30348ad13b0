//! Locale selection and normalization.
//!
//! Callers hand the factory whatever the transport gave them: a button
//! payload, a config value, or a JSON field that might not even be a string.
//! Every input maps to a supported [`Locale`]; anything that is not
//! case-insensitively `en` falls back to [`Locale::Ru`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A supported data locale.
///
/// # Examples
///
/// ```
/// use test_data_factory::Locale;
///
/// assert_eq!(Locale::from_tag("EN"), Locale::En);
/// assert_eq!(Locale::from_tag("fr"), Locale::Ru);
/// assert_eq!(Locale::En.to_string(), "EN");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Locale {
    /// Russian names, addresses and `+7` phone numbers.
    #[default]
    Ru,
    /// US English names, addresses and NANP phone numbers.
    En,
}

impl Locale {
    /// Every supported locale, in keyboard order.
    pub const ALL: [Self; 2] = [Self::Ru, Self::En];

    /// Resolves a textual tag, ignoring ASCII case.
    ///
    /// Unsupported, empty, or padded tags resolve to the default locale.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(Self::En.tag()) {
            Self::En
        } else {
            Self::Ru
        }
    }

    /// Resolves an arbitrary JSON value.
    ///
    /// Only JSON strings are inspected; `null`, booleans, numbers, arrays and
    /// objects resolve to the default locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use test_data_factory::Locale;
    ///
    /// assert_eq!(Locale::from_value(&json!("en")), Locale::En);
    /// assert_eq!(Locale::from_value(&json!(true)), Locale::Ru);
    /// assert_eq!(Locale::from_value(&json!(123)), Locale::Ru);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        value.as_str().map_or(Self::Ru, Self::from_tag)
    }

    /// Lowercase tag, as accepted by [`Locale::from_tag`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Uppercase label carried on generated records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ru => "RU",
            Self::En => "EN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<&String> for Locale {
    fn from(tag: &String) -> Self {
        Self::from_tag(tag)
    }
}

impl From<Option<&str>> for Locale {
    fn from(tag: Option<&str>) -> Self {
        tag.map_or(Self::Ru, Self::from_tag)
    }
}

impl From<&Value> for Locale {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}
