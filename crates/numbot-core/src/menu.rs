//! Menu labels, topic sections and the static texts the bot replies with.

use crate::messaging::types::{InlineKeyboard, ReplyKeyboard};

pub const BIRTH_DATE_LABEL: &str = "🔢 Узнай о себе по дате рождения (бесплатно)";
pub const BOOK_CONSULTATION_LABEL: &str = "🗓 Запись на консультацию";
pub const ABOUT_LABEL: &str = "🙋‍♀️ О себе";
pub const CONSULT_BUTTON_LABEL: &str = "Записаться";

pub const GREETING: &str = "Привет! Я бот канала: Код души. Цифровая психология и нумерология.\n\n\
Нумерология — это наука, изучающая взаимосвязь чисел и любых явлений, происходящих в мире. \
Самым главным числовым кодом, оказывающим огромное влияние на жизнь человека, является дата рождения. \
Она несёт в себе уникальную информацию, и если расшифровать её с помощью нумерологических знаний, то можно увидеть разные \
аспекты жизни человека, его характер, таланты, кармические задачи, миссию данного воплощения, его прошлое и будущее.\n\n\
Выбери, что тебе интересно:";

pub const ASK_DAY_PROMPT: &str = "Выбери число рождения (от 1 до 31):";
pub const DAY_REPROMPT: &str = "Пожалуйста, введите число от 1 до 31:";
pub const CONSULT_INVITATION: &str = "Чтобы получить подробную консультацию, нажми кнопку:";
pub const BOOK_CONSULTATION_PROMPT: &str = "Выберите раздел, по которому хотите консультацию:";
pub const ABOUT_TEXT: &str = "Я Наталья, специалист по цифровой психологии и нумерологии. \
Буду рада видеть тебя на своем канале. Там много всего интересного! @kod_dushi_8";
pub const CHOOSE_FROM_MENU: &str = "Пожалуйста, выбери пункт из меню.";
pub const CONSULT_CONFIRMATION: &str = "Ваш запрос принят! Мы свяжемся с вами скоро.";
pub const TECHNICAL_ERROR: &str =
    "Произошла техническая ошибка. Пожалуйста, попробуйте ещё раз позже.";

/// Prefix of the inline button payload; the topic slug follows.
pub const CONSULT_CALLBACK_PREFIX: &str = "consult:";

/// Topic sections offered in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    ChildMatrix,
    Relationships,
    Health,
    Personality,
    SoulMission,
    Money,
    Family,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::ChildMatrix,
        Topic::Relationships,
        Topic::Health,
        Topic::Personality,
        Topic::SoulMission,
        Topic::Money,
        Topic::Family,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::ChildMatrix => "👶 Детская матрица",
            Topic::Relationships => "❤️ Отношения",
            Topic::Health => "🧘‍♀️ Здоровье",
            Topic::Personality => "🧠 Личность",
            Topic::SoulMission => "🌟 Миссия души",
            Topic::Money => "💼 Реализация и деньги",
            Topic::Family => "🌳 Связь с родом",
        }
    }

    /// Stable ASCII id used in callback payloads.
    pub fn slug(self) -> &'static str {
        match self {
            Topic::ChildMatrix => "child",
            Topic::Relationships => "relationships",
            Topic::Health => "health",
            Topic::Personality => "personality",
            Topic::SoulMission => "mission",
            Topic::Money => "money",
            Topic::Family => "family",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Topic::ChildMatrix => "В этом разделе я проведу особый нумерологический расчёт и дам тебе знания о твоем ребёнке: таланты, энергии и задачи, с которыми он пришёл в этот мир.",
            Topic::Relationships => "Узнай, какие качества развивать для создания гармоничных отношений.",
            Topic::Health => "Информация о потенциальных заболеваниях и как улучшить физическое состояние.",
            Topic::Personality => "Кто ты, твой характер, таланты, сильные и слабые стороны, программы и ошибки.",
            Topic::SoulMission => "О глобальной задаче души в этом воплощении.",
            Topic::Money => "Что влияет на достаток и поток изобилия.",
            Topic::Family => "Что даёт связь с родом, родовые задачи и зачем пройти программу.",
        }
    }

    pub fn from_label(label: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn from_slug(slug: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn callback_data(self) -> String {
        format!("{CONSULT_CALLBACK_PREFIX}{}", self.slug())
    }

    pub fn from_callback_data(data: &str) -> Option<Topic> {
        data.strip_prefix(CONSULT_CALLBACK_PREFIX)
            .and_then(Topic::from_slug)
    }
}

/// Every recognized main-menu input; anything else is `Unrecognized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    BirthDate,
    Topic(Topic),
    BookConsultation,
    About,
    Unrecognized,
}

impl MenuAction {
    pub fn classify(text: &str) -> MenuAction {
        let text = text.trim();
        if text == BIRTH_DATE_LABEL {
            return MenuAction::BirthDate;
        }
        if let Some(topic) = Topic::from_label(text) {
            return MenuAction::Topic(topic);
        }
        match text {
            BOOK_CONSULTATION_LABEL => MenuAction::BookConsultation,
            ABOUT_LABEL => MenuAction::About,
            _ => MenuAction::Unrecognized,
        }
    }
}

pub fn main_menu() -> ReplyKeyboard {
    let row = |labels: &[&str]| labels.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ReplyKeyboard::new(vec![
        row(&[BIRTH_DATE_LABEL]),
        row(&[Topic::ChildMatrix.label()]),
        row(&[Topic::Relationships.label(), Topic::Health.label()]),
        row(&[Topic::Personality.label(), Topic::SoulMission.label()]),
        row(&[Topic::Money.label(), Topic::Family.label()]),
        row(&[BOOK_CONSULTATION_LABEL]),
        row(&[ABOUT_LABEL]),
    ])
}

/// Days 1..=31, five per row.
pub fn day_picker() -> ReplyKeyboard {
    let days: Vec<String> = (1..=31).map(|d: u32| d.to_string()).collect();
    ReplyKeyboard::new(days.chunks(5).map(|c| c.to_vec()).collect())
}

pub fn consultation_button(topic: Topic) -> InlineKeyboard {
    InlineKeyboard::single(CONSULT_BUTTON_LABEL, topic.callback_data())
}
