//! Telegram update handlers.
//!
//! Each handler is a thin adapter: it extracts the sender and payload from the
//! teloxide update and hands them to the core bot service.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message, User},
};

use numbot_core::domain;

use crate::router::AppState;

mod callback;
mod commands;

/// Where an incoming message goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route<'a> {
    Command(&'a str),
    Text(&'a str),
    Ignore,
}

fn route(text: Option<&str>) -> Route<'_> {
    match text {
        None => Route::Ignore,
        Some(t) if t.starts_with('/') => Route::Command(t),
        Some(t) => Route::Text(t),
    }
}

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    callback::handle_callback(bot, q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let chat_id = domain::ChatId(msg.chat.id.0);
    let requester = requester(user);

    match route(msg.text()) {
        Route::Command(text) => {
            return commands::handle_command(chat_id, &requester, text, state).await;
        }
        Route::Text(text) => state.service.on_text(chat_id, &requester, text).await,
        Route::Ignore => {
            tracing::debug!(user_id = requester.id.0, "ignoring non-text message")
        }
    }
    Ok(())
}

fn requester(user: &User) -> domain::Requester {
    domain::Requester {
        id: domain::UserId(user.id.0 as i64),
        username: user.username.clone(),
        full_name: Some(user.full_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_text_goes_to_commands() {
        assert_eq!(route(Some("/start")), Route::Command("/start"));
        assert_eq!(route(Some("/menu")), Route::Command("/menu"));
    }

    #[test]
    fn plain_text_goes_to_the_flow() {
        assert_eq!(route(Some("31")), Route::Text("31"));
        assert_eq!(route(Some("❤️ Отношения")), Route::Text("❤️ Отношения"));
        assert_eq!(route(Some(" /start")), Route::Text(" /start"));
    }

    #[test]
    fn non_text_is_ignored() {
        assert_eq!(route(None), Route::Ignore);
    }
}
