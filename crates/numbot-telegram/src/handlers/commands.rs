use std::sync::Arc;

use teloxide::prelude::*;

use numbot_core::domain::{ChatId, Requester};

use crate::router::AppState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum BotCommand {
    Start,
    Other(String),
}

fn parse_command(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.split_whitespace().next().unwrap_or("");
    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

pub(super) fn classify_command(text: &str) -> BotCommand {
    match parse_command(text).as_str() {
        "start" => BotCommand::Start,
        other => BotCommand::Other(other.to_string()),
    }
}

pub async fn handle_command(
    chat_id: ChatId,
    requester: &Requester,
    text: &str,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    match classify_command(text) {
        BotCommand::Start => state.service.on_start(chat_id, requester).await,
        BotCommand::Other(name) => {
            tracing::debug!(user_id = requester.id.0, command = %name, "ignoring command")
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_addressed_commands() {
        assert_eq!(parse_command("/start"), "start");
        assert_eq!(parse_command("/START@numbot payload"), "start");
        assert_eq!(parse_command("  /menu  "), "menu");
        assert_eq!(parse_command("/"), "");
    }

    #[test]
    fn only_start_is_handled() {
        assert_eq!(classify_command("/start"), BotCommand::Start);
        assert_eq!(classify_command("/start@numbot"), BotCommand::Start);
        assert_eq!(
            classify_command("/menu"),
            BotCommand::Other("menu".to_string())
        );
        assert_eq!(
            classify_command("/help"),
            BotCommand::Other("help".to_string())
        );
    }
}
