//! Word lists backing the Russian identity provider.

pub(super) const MALE_FIRST_NAMES: &[&str] = &[
    "Александр", "Алексей", "Андрей", "Антон", "Артём", "Борис", "Вадим",
    "Василий", "Виктор", "Владимир", "Герман", "Глеб", "Григорий", "Даниил",
    "Денис", "Дмитрий", "Евгений", "Егор", "Иван", "Игорь", "Илья", "Кирилл",
    "Константин", "Лев", "Максим", "Матвей", "Михаил", "Никита", "Николай",
    "Олег", "Павел", "Пётр", "Роман", "Сергей", "Станислав", "Степан",
    "Тимофей", "Фёдор", "Юрий", "Ярослав",
];

pub(super) const FEMALE_FIRST_NAMES: &[&str] = &[
    "Александра", "Алина", "Алла", "Анастасия", "Анна", "Валентина",
    "Валерия", "Вера", "Виктория", "Галина", "Дарья", "Евгения", "Екатерина",
    "Елена", "Елизавета", "Жанна", "Зоя", "Ирина", "Ксения", "Лариса",
    "Любовь", "Людмила", "Маргарита", "Марина", "Мария", "Надежда", "Наталья",
    "Нина", "Оксана", "Ольга", "Полина", "Светлана", "София", "Тамара",
    "Татьяна", "Ульяна", "Юлия", "Яна",
];

/// Patronymic stems; the gendered suffix is appended by the provider.
pub(super) const PATRONYMIC_STEMS: &[&str] = &[
    "Александров", "Алексеев", "Андреев", "Антонов", "Борисов", "Вадимов",
    "Викторов", "Владимиров", "Глебов", "Григорьев", "Денисов", "Дмитриев",
    "Евгеньев", "Егоров", "Иванов", "Игорев", "Кириллов", "Константинов",
    "Максимов", "Михайлов", "Николаев", "Олегов", "Павлов", "Петров",
    "Романов", "Сергеев", "Степанов", "Тимофеев", "Фёдоров", "Юрьев",
    "Ярославов",
];

/// Masculine surname forms; feminine forms are derived by the provider.
pub(super) const LAST_NAMES: &[&str] = &[
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров",
    "Соколов", "Михайлов", "Новиков", "Фёдоров", "Морозов", "Волков",
    "Алексеев", "Лебедев", "Семёнов", "Егоров", "Павлов", "Козлов",
    "Степанов", "Николаев", "Орлов", "Андреев", "Макаров", "Никитин",
    "Захаров", "Зайцев", "Соловьёв", "Борисов", "Яковлев", "Григорьев",
    "Романов", "Воробьёв", "Сергеев", "Кудрявцев", "Белов", "Тарасов",
    "Беляев", "Комаров", "Киселёв", "Ильин",
];

pub(super) const SETTLEMENT_PREFIXES: &[&str] = &["г.", "г.", "г.", "пос.", "с.", "д."];

pub(super) const CITIES: &[&str] = &[
    "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань",
    "Нижний Новгород", "Челябинск", "Самара", "Омск", "Ростов-на-Дону",
    "Уфа", "Красноярск", "Воронеж", "Пермь", "Волгоград", "Краснодар",
    "Саратов", "Тюмень", "Тольятти", "Ижевск", "Барнаул", "Ульяновск",
    "Иркутск", "Хабаровск", "Ярославль", "Владивосток", "Махачкала", "Томск",
    "Оренбург", "Кемерово", "Рязань", "Астрахань", "Пенза", "Липецк",
    "Калининград", "Тула", "Курск", "Сочи", "Ставрополь", "Мурманск",
];

pub(super) const STREET_TYPES: &[&str] = &[
    "ул.", "ул.", "ул.", "пр.", "пер.", "бул.", "наб.", "шоссе", "пл.", "алл.",
];

pub(super) const STREET_NAMES: &[&str] = &[
    "Ленина", "Мира", "Советская", "Садовая", "Лесная", "Школьная",
    "Молодёжная", "Центральная", "Набережная", "Заречная", "Гагарина",
    "Пушкина", "Лермонтова", "Чехова", "Толстого", "Горького", "Кирова",
    "Победы", "Октябрьская", "Полевая", "Строителей", "Зелёная",
    "Комсомольская", "Пролетарская", "Первомайская", "Солнечная",
    "Новая", "Рабочая", "Спортивная", "Вокзальная", "Луговая", "Берёзовая",
    "Сиреневая", "Речная", "Парковая", "Маяковского", "Суворова",
    "Кутузова", "Некрасова", "Фрунзе",
];
