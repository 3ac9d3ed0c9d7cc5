//! Conversation state machine: menu → ask day → reduce → respond.
//!
//! Pure: every transition is computed from the current state, the classified
//! input and the description table. Sending is the bot service's job.

use std::sync::Arc;

use crate::{
    descriptions::DescriptionTable,
    menu::{self, MenuAction},
    messaging::types::ReplyMarkup,
    reducer,
};

/// Per-user conversation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingDay,
}

/// Text to send back plus the keyboard that goes with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markup: ReplyMarkup,
}

impl Reply {
    pub fn new(text: impl Into<String>, markup: ReplyMarkup) -> Self {
        Self {
            text: text.into(),
            markup,
        }
    }

    pub fn with_main_menu(text: impl Into<String>) -> Self {
        Self::new(text, ReplyMarkup::Reply(menu::main_menu()))
    }

    pub fn with_day_picker(text: impl Into<String>) -> Self {
        Self::new(text, ReplyMarkup::Reply(menu::day_picker()))
    }
}

/// Outcome of a single transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub reply: Reply,
    pub next: SessionState,
}

#[derive(Clone, Debug)]
pub struct ConversationFlow {
    table: Arc<DescriptionTable>,
}

impl ConversationFlow {
    pub fn new(table: Arc<DescriptionTable>) -> Self {
        Self { table }
    }

    /// `/start` resets any pending sub-flow.
    pub fn start(&self) -> Step {
        Step {
            reply: Reply::with_main_menu(menu::GREETING),
            next: SessionState::Idle,
        }
    }

    pub fn step(&self, state: SessionState, text: &str) -> Step {
        match state {
            SessionState::Idle => self.on_menu(MenuAction::classify(text)),
            SessionState::AwaitingDay => self.on_day(text),
        }
    }

    fn on_menu(&self, action: MenuAction) -> Step {
        let (reply, next) = match action {
            MenuAction::BirthDate => (
                Reply::with_day_picker(menu::ASK_DAY_PROMPT),
                SessionState::AwaitingDay,
            ),
            MenuAction::Topic(topic) => (
                Reply::new(
                    format!("{}\n\n{}", topic.description(), menu::CONSULT_INVITATION),
                    ReplyMarkup::Inline(menu::consultation_button(topic)),
                ),
                SessionState::Idle,
            ),
            MenuAction::BookConsultation => (
                Reply::with_main_menu(menu::BOOK_CONSULTATION_PROMPT),
                SessionState::Idle,
            ),
            MenuAction::About => (
                Reply::new(menu::ABOUT_TEXT, ReplyMarkup::None),
                SessionState::Idle,
            ),
            MenuAction::Unrecognized => (
                Reply::with_main_menu(menu::CHOOSE_FROM_MENU),
                SessionState::Idle,
            ),
        };
        Step { reply, next }
    }

    fn on_day(&self, text: &str) -> Step {
        let Some(day) = reducer::parse_day(text) else {
            return Step {
                reply: Reply::with_day_picker(menu::DAY_REPROMPT),
                next: SessionState::AwaitingDay,
            };
        };

        let number = reducer::reduce(day);
        let description = self.table.lookup(number);
        Step {
            reply: Reply::with_main_menu(format!("Ваше число: {number}\n\n{description}")),
            next: SessionState::Idle,
        }
    }
}
