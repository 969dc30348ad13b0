//! Markdown rendering of generated records for chat replies.
//!
//! Rendering is the only place long payloads are shortened: records keep
//! their full values, and [`preview`] trims them for display.

mod keyboard;

use std::borrow::Cow;
use std::fmt::{self, Write};

use serde::Serialize;

use crate::boundary::BoundaryEntry;
use crate::card::CardRecord;
use crate::email::TempEmailRecord;
use crate::identity::IdentityRecord;
use crate::locale::Locale;

pub use keyboard::{Action, KEYBOARD, fallback_text, help_text, welcome_text};

/// Default number of characters shown for a boundary value.
pub const DEFAULT_PREVIEW_LIMIT: usize = 100;

/// Marker shown in place of an empty boundary value.
pub const EMPTY_VALUE_MARKER: &str = "[ПУСТАЯ СТРОКА]";

/// Shortens `value` to at most `limit` characters, appending `...` when cut.
///
/// # Examples
///
/// ```
/// use test_data_factory::presentation::preview;
///
/// assert_eq!(preview("abcdef", 3), "abc...");
/// assert_eq!(preview("abc", 3), "abc");
/// ```
#[must_use]
pub fn preview(value: &str, limit: usize) -> Cow<'_, str> {
    match value.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}...", value.get(..cut).unwrap_or(value))),
        None => Cow::Borrowed(value),
    }
}

/// A generated reply, before rendering.
///
/// Serializes untagged: records as objects, the catalog and keyboard as
/// arrays, static texts as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Identity record.
    Identity(IdentityRecord),
    /// Test card.
    Card(CardRecord),
    /// Boundary catalog.
    Boundary(&'static [BoundaryEntry]),
    /// Disposable address.
    TempEmail(TempEmailRecord),
    /// Keyboard layout.
    Keyboard(&'static [[&'static str; 2]; 3]),
    /// Static text such as help.
    Text(&'static str),
}

impl Reply {
    /// Renders the reply as chat Markdown.
    #[must_use]
    pub fn render(&self, preview_limit: usize) -> String {
        match self {
            Self::Identity(record) => render_identity(record),
            Self::Card(record) => render_card(record),
            Self::Boundary(entries) => render_boundary_entries(entries, preview_limit),
            Self::TempEmail(record) => render_temp_email(record),
            Self::Keyboard(rows) => render_keyboard(rows.as_slice()),
            Self::Text(text) => (*text).to_owned(),
        }
    }
}

/// Renders keyboard rows, one row per line.
#[must_use]
pub fn render_keyboard(rows: &[[&str; 2]]) -> String {
    rows.iter()
        .map(|row| row.join(" | "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders an identity with headings in the record's language.
#[must_use]
pub fn render_identity(record: &IdentityRecord) -> String {
    let (heading, name, address, phone) = match record.locale {
        Locale::Ru => ("ФИО и адрес", "ФИО", "Адрес", "Телефон"),
        Locale::En => ("Name and Address", "Full Name", "Address", "Phone"),
    };
    format!(
        "*{heading} ({locale}):*\n\n\
         👤 *{name}:* {full_name}\n\
         🏠 *{address}:* {address_value}\n\
         📞 *{phone}:* {phone_value}",
        locale = record.locale,
        full_name = record.full_name,
        address_value = record.address,
        phone_value = record.phone,
    )
}

/// Renders a test card with its warning footer.
#[must_use]
pub fn render_card(record: &CardRecord) -> String {
    format!(
        "*Тестовая кредитная карта:*\n\n\
         🔢 *Номер:* `{number}`\n\
         🏷️ *Тип:* {brand}\n\
         📅 *Срок:* {expiry}\n\
         🔐 *CVV:* {cvv}\n\n\
         ⚠️ *Это НЕ настоящая карта!* Используйте только для тестов.",
        number = record.number,
        brand = record.brand,
        expiry = record.expiry,
        cvv = record.cvv,
    )
}

/// Renders the boundary catalog, truncating values past `preview_limit`.
#[must_use]
pub fn render_boundary_entries(entries: &[BoundaryEntry], preview_limit: usize) -> String {
    let mut out = String::from("*Граничные строки и инъекции:*\n\n");
    if let Err(err) = write_boundary_entries(&mut out, entries, preview_limit) {
        drop(err);
    }
    out.push_str(
        "💡 *Совет:* Используйте эти строки для тестирования:\n\
         • Валидации полей ввода\n\
         • Обработки спецсимволов\n\
         • Защиты от инъекций",
    );
    out
}

fn write_boundary_entries(
    out: &mut String,
    entries: &[BoundaryEntry],
    preview_limit: usize,
) -> fmt::Result {
    for entry in entries {
        writeln!(out, "*{}*\n_{}_", entry.title, entry.description)?;
        if entry.value.is_empty() {
            writeln!(out, "`{EMPTY_VALUE_MARKER}`")?;
        } else {
            writeln!(out, "```\n{}\n```", preview(&entry.value, preview_limit))?;
        }
        writeln!(out, "Длина: {} символов\n", entry.char_len())?;
    }
    Ok(())
}

/// Renders a disposable address with its note.
#[must_use]
pub fn render_temp_email(record: &TempEmailRecord) -> String {
    format!(
        "*Временный email адрес:*\n\n📭 `{}`\n\n*Примечание:* {}",
        record.email, record.note
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::boundary::list_boundary_entries;
    use crate::card::CardBrand;

    #[rstest]
    #[case("", 100, "")]
    #[case("short", 100, "short")]
    #[case("exact", 5, "exact")]
    #[case("exceeds", 3, "exc...")]
    #[case("Привет", 2, "Пр...")]
    #[case("🌎🌎🌎", 1, "🌎...")]
    #[case("abc", 0, "...")]
    fn preview_truncates_by_characters(
        #[case] value: &str,
        #[case] limit: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(preview(value, limit), expected);
    }

    #[test]
    fn preview_borrows_short_values() {
        assert!(matches!(preview("abc", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn identity_headings_follow_locale() {
        let record = IdentityRecord {
            full_name: "John Smith".to_owned(),
            address: "1 Main St, Springfield, IL 62701".to_owned(),
            phone: "(212) 555-0100".to_owned(),
            locale: Locale::En,
        };
        let text = render_identity(&record);
        assert!(text.starts_with("*Name and Address (EN):*"));
        assert!(text.contains("👤 *Full Name:* John Smith"));
        assert!(text.contains("📞 *Phone:* (212) 555-0100"));
    }

    #[test]
    fn russian_identity_uses_russian_headings() {
        let record = IdentityRecord {
            full_name: "Иванов Иван Иванович".to_owned(),
            address: "г. Москва, ул. Ленина, д. 1, кв. 2, 123456".to_owned(),
            phone: "+7 (912) 345-67-89".to_owned(),
            locale: Locale::Ru,
        };
        let text = render_identity(&record);
        assert!(text.starts_with("*ФИО и адрес (RU):*"));
        assert!(text.contains("🏠 *Адрес:* г. Москва"));
    }

    #[test]
    fn card_text_includes_number_and_warning() {
        let record = CardRecord {
            number: "4111 1111 1111 1111".to_owned(),
            brand: CardBrand::Visa,
            expiry: "07/27".to_owned(),
            cvv: "042".to_owned(),
        };
        let text = render_card(&record);
        assert!(text.contains("`4111 1111 1111 1111`"));
        assert!(text.contains("*Тип:* Visa"));
        assert!(text.contains("*CVV:* 042"));
        assert!(text.contains("НЕ настоящая карта"));
    }

    #[test]
    fn boundary_text_truncates_and_reports_full_length() {
        let text = render_boundary_entries(list_boundary_entries(), DEFAULT_PREVIEW_LIMIT);
        assert!(text.contains(&format!("{}...", "A".repeat(100))));
        assert!(!text.contains(&"A".repeat(101)));
        assert!(text.contains("Длина: 255 символов"));
        assert!(text.contains("Длина: 1000 символов"));
        assert!(text.contains(&format!("`{EMPTY_VALUE_MARKER}`")));
        assert!(text.contains("Длина: 0 символов"));
    }

    #[test]
    fn boundary_entries_render_as_separate_blocks() {
        let entries = list_boundary_entries();
        let text = render_boundary_entries(entries, 3);
        let first = entries.first().expect("catalog entry");

        let expected_first = format!(
            "*{}*\n_{}_\n```\nAAA...\n```\nДлина: 255 символов\n\n",
            first.title, first.description
        );
        assert!(text.contains(&expected_first), "{text}");
        assert!(text.contains(&format!("`{EMPTY_VALUE_MARKER}`\nДлина: 0 символов\n\n")));
        assert!(text.ends_with("• Защиты от инъекций"));
    }

    #[test]
    fn boundary_text_keeps_short_payloads_whole() {
        let text = render_boundary_entries(list_boundary_entries(), DEFAULT_PREVIEW_LIMIT);
        assert!(text.contains("<script>alert(\"XSS\")</script>"));
        assert!(text.contains("' OR '1'='1'; --"));
    }

    #[test]
    fn keyboard_renders_one_row_per_line() {
        let text = render_keyboard(&KEYBOARD);
        assert_eq!(text.lines().count(), KEYBOARD.len());
        assert!(text.starts_with("🇷🇺 ФИО и адрес (RU) | 🇺🇸 ФИО и адрес (EN)"));
    }

    #[test]
    fn replies_serialize_untagged() {
        let text = serde_json::to_value(Reply::Text("hi")).expect("serialize");
        assert_eq!(text, serde_json::json!("hi"));
        let catalog = serde_json::to_value(Reply::Boundary(list_boundary_entries()))
            .expect("serialize");
        assert_eq!(catalog.as_array().map(Vec::len), Some(9));
        assert_eq!(catalog[2]["kind"], "sql_injection");
    }

    #[test]
    fn text_reply_renders_verbatim() {
        assert_eq!(Reply::Text("plain").render(DEFAULT_PREVIEW_LIMIT), "plain");
    }

    #[test]
    fn temp_email_text_shows_address() {
        let record = TempEmailRecord {
            email: "abc123defg@yopmail.com".to_owned(),
            note: "note",
        };
        let text = render_temp_email(&record);
        assert!(text.contains("`abc123defg@yopmail.com`"));
        assert!(text.ends_with("*Примечание:* note"));
    }
}
