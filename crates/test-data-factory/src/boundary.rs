//! Fixed catalog of boundary and injection test strings.
//!
//! The catalog is constant data: the same entries, in the same order, on
//! every call. Values are raw payloads and may be empty, very long, or carry
//! control characters; display truncation belongs to the presentation layer.

use std::sync::LazyLock;

use serde::Serialize;

/// Length of the length-limit probe.
pub const LENGTH_LIMIT_PROBE_LEN: usize = 255;

/// Length of the long-string performance probe.
pub const LONG_STRING_PROBE_LEN: usize = 1000;

/// What a catalog entry probes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// Exactly 255 characters.
    LengthLimit,
    /// Punctuation and shell/markup metacharacters.
    SpecialCharacters,
    /// Classic tautology SQL injection.
    SqlInjection,
    /// Script-tag XSS payload.
    Xss,
    /// The empty string.
    Empty,
    /// One thousand characters.
    LongString,
    /// Multi-byte symbols, emoji and non-Latin scripts.
    Unicode,
    /// Mixed letter case and digits.
    MixedCase,
    /// Newline, tab and carriage return.
    ControlCharacters,
}

/// One boundary test string with its label and explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryEntry {
    /// Probe category.
    pub kind: BoundaryKind,
    /// Short human label, prefixed with an icon.
    pub title: &'static str,
    /// Raw test payload.
    pub value: String,
    /// What the payload is meant to exercise.
    pub description: &'static str,
}

impl BoundaryEntry {
    fn new(
        kind: BoundaryKind,
        title: &'static str,
        value: impl Into<String>,
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            title,
            value: value.into(),
            description,
        }
    }

    /// Length of the payload in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

static CATALOG: LazyLock<Vec<BoundaryEntry>> = LazyLock::new(|| {
    vec![
        BoundaryEntry::new(
            BoundaryKind::LengthLimit,
            "📏 Строка ровно 255 символов",
            "A".repeat(LENGTH_LIMIT_PROBE_LEN),
            "Проверка ограничения длины (255 символов)",
        ),
        BoundaryEntry::new(
            BoundaryKind::SpecialCharacters,
            "⚠️ Спецсимволы",
            r#"!@#$%^&*()_+{}|:"<>?[]\;',./`~"#,
            "Строка со специальными символами",
        ),
        BoundaryEntry::new(
            BoundaryKind::SqlInjection,
            "🥷 SQL-инъекция",
            "' OR '1'='1'; --",
            "Базовый пример SQL-инъекции (для тестирования)",
        ),
        BoundaryEntry::new(
            BoundaryKind::Xss,
            "🛡️ XSS-инъекция",
            r#"<script>alert("XSS")</script>"#,
            "Базовый пример XSS-инъекции (для тестирования)",
        ),
        BoundaryEntry::new(
            BoundaryKind::Empty,
            "⚫ Пустая строка",
            "",
            "Пустая строка для проверки обязательных полей",
        ),
        BoundaryEntry::new(
            BoundaryKind::LongString,
            "🐌 Очень длинная строка (1000 символов)",
            "B".repeat(LONG_STRING_PROBE_LEN),
            "Строка из 1000 символов (тест на производительность)",
        ),
        BoundaryEntry::new(
            BoundaryKind::Unicode,
            "🌍 Эмодзи и юникод",
            "Тест € ¥ 🌎 𐌀 𐌁 𐌂 Привет 你好",
            "Строка с эмодзи и мультиязычными символами",
        ),
        BoundaryEntry::new(
            BoundaryKind::MixedCase,
            "🔤 Смешанный регистр",
            "Тест Test тест TEST 123",
            "Строка с символами в разном регистре",
        ),
        BoundaryEntry::new(
            BoundaryKind::ControlCharacters,
            "📝 Переносы строк и табуляция",
            "Первая строка\nВторая строка\tТабуляция\rВозврат каретки",
            "Строка с управляющими символами",
        ),
    ]
});

/// Returns the boundary catalog.
///
/// # Example
///
/// ```
/// use test_data_factory::list_boundary_entries;
///
/// let entries = list_boundary_entries();
/// assert!(entries.iter().any(|entry| entry.value.is_empty()));
/// assert_eq!(entries, list_boundary_entries());
/// ```
#[must_use]
pub fn list_boundary_entries() -> &'static [BoundaryEntry] {
    CATALOG.as_slice()
}

/// Looks up the entry for `kind`.
#[must_use]
pub fn boundary_entry(kind: BoundaryKind) -> Option<&'static BoundaryEntry> {
    list_boundary_entries().iter().find(|entry| entry.kind == kind)
}
