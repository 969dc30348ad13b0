//! Reply keyboard labels and the actions they trigger.

use rand::Rng;
use tracing::debug;

use super::Reply;
use crate::boundary::list_boundary_entries;
use crate::card::generate_card_with_rng;
use crate::email::generate_temp_email_with_rng;
use crate::identity::generate_identity_with_rng;
use crate::locale::Locale;

/// Reply keyboard layout, row by row.
pub const KEYBOARD: [[&str; 2]; 3] = [
    [
        Action::Identity(Locale::Ru).label(),
        Action::Identity(Locale::En).label(),
    ],
    [Action::Card.label(), Action::Boundary.label()],
    [Action::TempEmail.label(), Action::Help.label()],
];

/// A generation request triggered by a keyboard button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Name, address and phone for a locale.
    Identity(Locale),
    /// Luhn-valid test card.
    Card,
    /// Boundary string catalog.
    Boundary,
    /// Disposable email address.
    TempEmail,
    /// Usage help.
    Help,
}

impl Action {
    /// Every action, in keyboard order.
    pub const ALL: [Self; 6] = [
        Self::Identity(Locale::Ru),
        Self::Identity(Locale::En),
        Self::Card,
        Self::Boundary,
        Self::TempEmail,
        Self::Help,
    ];

    /// Button label for the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Identity(Locale::Ru) => "🇷🇺 ФИО и адрес (RU)",
            Self::Identity(Locale::En) => "🇺🇸 ФИО и адрес (EN)",
            Self::Card => "💳 Номер карты",
            Self::Boundary => "📏 Граничные строки",
            Self::TempEmail => "📧 Временный email",
            Self::Help => "🆘 Помощь",
        }
    }

    /// Resolves a button label; labels must match exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use test_data_factory::presentation::Action;
    ///
    /// assert_eq!(Action::from_label("💳 Номер карты"), Some(Action::Card));
    /// assert_eq!(Action::from_label("card"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }

    /// Runs the generator behind the action.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> Reply {
        debug!(action = ?self, "executing keyboard action");
        match self {
            Self::Identity(locale) => Reply::Identity(generate_identity_with_rng(locale, rng)),
            Self::Card => Reply::Card(generate_card_with_rng(rng)),
            Self::Boundary => Reply::Boundary(list_boundary_entries()),
            Self::TempEmail => Reply::TempEmail(generate_temp_email_with_rng(rng)),
            Self::Help => Reply::Text(help_text()),
        }
    }

    /// Runs the action and renders the reply text.
    pub fn execute<R: Rng + ?Sized>(self, rng: &mut R, preview_limit: usize) -> String {
        self.generate(rng).render(preview_limit)
    }
}

/// Greeting shown on `/start`.
#[must_use]
pub const fn welcome_text() -> &'static str {
    "🛠️ *Test Data Factory Bot*\n\n\
     Я помогаю создавать тестовые данные для проверки ПО.\n\
     Выберите тип данных на клавиатуре ниже:\n\n\
     • *ФИО и адрес* — реалистичные данные на русском и английском\n\
     • *Номер карты* — валидный номер (алгоритм Луна)\n\
     • *Граничные строки* — для проверки полей ввода и безопасности\n\
     • *Временный email* — адрес для одноразовой почты\n\n\
     Также используйте команды:\n\
     /start - перезапуск бота\n\
     /help - справка"
}

/// Usage help shown on `/help` and the help button.
#[must_use]
pub const fn help_text() -> &'static str {
    "📚 *Справка по Test Data Factory*\n\n\
     *Как использовать:*\n\
     1. Просто нажмите на одну из кнопок клавиатуры.\n\
     2. Бот мгновенно сгенерирует данные.\n\n\
     *Описание генераторов:*\n\
     • *ФИО и адрес* — реалистичные персональные данные на русском и английском.\n\
     • *Номер карты* — генерируется по алгоритму Луна. Это *НЕ настоящая* карта!\n\
     • *Граничные строки* — данные для тестирования полей ввода (ограничения, инъекции, спецсимволы).\n\
     • *Временный email* — адрес на одноразовых почтовых сервисах.\n\n\
     ⚠️ *Важно:* Все данные сгенерированы случайно и используются только для тестирования."
}

/// Reply for text that matches no button.
#[must_use]
pub const fn fallback_text() -> &'static str {
    "Пожалуйста, используйте кнопки клавиатуры или команду /help."
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::presentation::DEFAULT_PREVIEW_LIMIT;

    #[test]
    fn keyboard_lists_every_action_once() {
        let labels: Vec<&str> = KEYBOARD.iter().flatten().copied().collect();
        let expected: Vec<&str> = Action::ALL.iter().map(|action| action.label()).collect();
        assert_eq!(labels, expected);
    }

    #[rstest]
    #[case(Action::Identity(Locale::Ru))]
    #[case(Action::Identity(Locale::En))]
    #[case(Action::Card)]
    #[case(Action::Boundary)]
    #[case(Action::TempEmail)]
    #[case(Action::Help)]
    fn labels_round_trip(#[case] action: Action) {
        assert_eq!(Action::from_label(action.label()), Some(action));
    }

    #[rstest]
    #[case("")]
    #[case("💳 номер карты")]
    #[case("Номер карты")]
    #[case("/start")]
    fn unknown_labels_resolve_to_none(#[case] label: &str) {
        assert_eq!(Action::from_label(label), None);
    }

    #[rstest]
    #[case(Action::Identity(Locale::Ru), "*ФИО и адрес (RU):*")]
    #[case(Action::Identity(Locale::En), "*Name and Address (EN):*")]
    #[case(Action::Card, "*Тестовая кредитная карта:*")]
    #[case(Action::Boundary, "*Граничные строки и инъекции:*")]
    #[case(Action::TempEmail, "*Временный email адрес:*")]
    #[case(Action::Help, "📚 *Справка по Test Data Factory*")]
    fn actions_render_their_heading(#[case] action: Action, #[case] heading: &str) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let reply = action.execute(&mut rng, DEFAULT_PREVIEW_LIMIT);
        assert!(reply.starts_with(heading), "reply: {reply}");
    }

    #[test]
    fn static_texts_mention_commands() {
        assert!(welcome_text().contains("/help"));
        assert!(help_text().contains("алгоритму Луна"));
        assert!(fallback_text().contains("/help"));
    }
}
