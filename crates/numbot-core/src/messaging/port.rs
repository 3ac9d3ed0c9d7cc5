use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::ReplyMarkup,
    Result,
};

/// Outbound messaging port.
///
/// Telegram is the only implementation; the core never talks to teloxide
/// directly so flows stay testable with an in-memory fake.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str, markup: ReplyMarkup)
        -> Result<MessageRef>;

    /// Replace the text of an earlier message (drops its inline keyboard).
    async fn edit_text(&self, msg: MessageRef, text: &str) -> Result<()>;

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
