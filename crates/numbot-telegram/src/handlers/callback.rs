use std::sync::Arc;

use teloxide::prelude::*;

use numbot_core::{
    bot::ConsultationCallback,
    domain::{ChatId, MessageId, MessageRef},
};

use crate::router::AppState;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let data = q.data.clone().unwrap_or_default();
    let Some(source) = q.message.as_ref() else {
        // Inline-mode callbacks carry no chat; nothing to confirm into.
        let _ = bot.answer_callback_query(q.id.clone()).await;
        return Ok(());
    };
    if data.is_empty() {
        let _ = bot.answer_callback_query(q.id.clone()).await;
        return Ok(());
    }

    let chat_id = ChatId(source.chat.id.0);
    let message = MessageRef {
        chat_id,
        message_id: MessageId(source.id.0),
    };

    state
        .service
        .on_consultation_requested(ConsultationCallback {
            chat_id,
            requester: super::requester(&q.from),
            callback_id: q.id.clone(),
            data,
            message: Some(message),
        })
        .await;

    Ok(())
}
