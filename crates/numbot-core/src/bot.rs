//! Bot service: runs the conversation flow for each user and talks to the
//! messaging port.
//!
//! Every public handler is infallible from the caller's point of view. Errors
//! from the inner steps are logged, answered with the generic technical-error
//! text, and the user's session drops back to `Idle`.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    consultation::ConsultationRequest,
    descriptions::DescriptionTable,
    domain::{ChatId, MessageRef, Requester, UserId},
    flow::{ConversationFlow, Reply, SessionState, Step},
    menu::{self, Topic},
    messaging::{port::MessagingPort, types::ReplyMarkup},
    Result,
};

/// Inline button press coming back from the transport.
#[derive(Clone, Debug)]
pub struct ConsultationCallback {
    pub chat_id: ChatId,
    pub requester: Requester,
    pub callback_id: String,
    pub data: String,
    /// Message that carried the button, edited into the confirmation.
    pub message: Option<MessageRef>,
}

pub struct NumerologyBot {
    flow: ConversationFlow,
    admin_chat_id: ChatId,
    messenger: Arc<dyn MessagingPort>,
    // Only users in the middle of the birth-date flow have an entry.
    sessions: Mutex<HashMap<UserId, SessionState>>,
}

impl NumerologyBot {
    pub fn new(
        table: Arc<DescriptionTable>,
        admin_chat_id: ChatId,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            flow: ConversationFlow::new(table),
            admin_chat_id,
            messenger,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn session_state(&self, user_id: UserId) -> SessionState {
        self.sessions
            .lock()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    pub async fn on_start(&self, chat_id: ChatId, requester: &Requester) {
        tracing::info!(user_id = requester.id.0, chat_id = chat_id.0, "start");
        let step = self.flow.start();
        if let Err(e) = self.apply(chat_id, requester.id, step).await {
            self.recover(chat_id, requester.id, "start", e).await;
        }
    }

    pub async fn on_text(&self, chat_id: ChatId, requester: &Requester, text: &str) {
        let step = {
            let mut sessions = self.sessions.lock().await;
            let state = sessions.get(&requester.id).copied().unwrap_or_default();
            let step = self.flow.step(state, text);
            tracing::debug!(
                user_id = requester.id.0,
                from = ?state,
                to = ?step.next,
                "conversation step"
            );
            store(&mut sessions, requester.id, step.next);
            step
        };

        if let Err(e) = self.send(chat_id, step.reply).await {
            self.recover(chat_id, requester.id, "text", e).await;
        }
    }

    pub async fn on_consultation_requested(&self, cb: ConsultationCallback) {
        let chat_id = cb.chat_id;
        let user_id = cb.requester.id;
        if let Err(e) = self.consultation(cb).await {
            self.recover(chat_id, user_id, "consultation", e).await;
        }
    }

    async fn consultation(&self, cb: ConsultationCallback) -> Result<()> {
        let Some(topic) = Topic::from_callback_data(&cb.data) else {
            tracing::warn!(user_id = cb.requester.id.0, data = %cb.data, "unknown callback data");
            self.answer_callback(&cb.callback_id, Some("Неизвестный раздел"))
                .await;
            return Ok(());
        };

        self.answer_callback(&cb.callback_id, None).await;

        let request = ConsultationRequest::new(topic, cb.requester.clone());
        self.relay(&request).await;

        self.confirm(cb.chat_id, cb.message).await
    }

    /// Forward a consultation request to the administrator.
    ///
    /// Failure is logged only; the requester is confirmed regardless.
    async fn relay(&self, request: &ConsultationRequest) {
        let text = request.admin_message();
        match self
            .messenger
            .send_text(self.admin_chat_id, &text, ReplyMarkup::None)
            .await
        {
            Ok(_) => tracing::info!(
                user_id = request.requester.id.0,
                topic = request.topic.slug(),
                "consultation request relayed"
            ),
            Err(e) => tracing::error!(
                user_id = request.requester.id.0,
                topic = request.topic.slug(),
                admin_chat_id = self.admin_chat_id.0,
                "failed to relay consultation request: {e}"
            ),
        }
    }

    async fn confirm(&self, chat_id: ChatId, source: Option<MessageRef>) -> Result<()> {
        if let Some(msg) = source {
            match self
                .messenger
                .edit_text(msg, menu::CONSULT_CONFIRMATION)
                .await
            {
                Ok(()) => return Ok(()),
                Err(e) => tracing::warn!(
                    chat_id = chat_id.0,
                    "editing consultation message failed, sending instead: {e}"
                ),
            }
        }
        self.messenger
            .send_text(chat_id, menu::CONSULT_CONFIRMATION, ReplyMarkup::None)
            .await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) {
        if let Err(e) = self.messenger.answer_callback_query(callback_id, text).await {
            tracing::warn!("answer_callback_query failed: {e}");
        }
    }

    async fn apply(&self, chat_id: ChatId, user_id: UserId, step: Step) -> Result<()> {
        store(&mut *self.sessions.lock().await, user_id, step.next);
        self.send(chat_id, step.reply).await
    }

    async fn send(&self, chat_id: ChatId, reply: Reply) -> Result<()> {
        self.messenger
            .send_text(chat_id, &reply.text, reply.markup)
            .await?;
        Ok(())
    }

    async fn recover(&self, chat_id: ChatId, user_id: UserId, context: &str, err: crate::Error) {
        tracing::error!(
            user_id = user_id.0,
            chat_id = chat_id.0,
            context,
            "handler failed: {err}"
        );
        self.sessions.lock().await.remove(&user_id);

        if let Err(e) = self
            .messenger
            .send_text(
                chat_id,
                menu::TECHNICAL_ERROR,
                ReplyMarkup::Reply(menu::main_menu()),
            )
            .await
        {
            tracing::error!(chat_id = chat_id.0, "failed to send error notice: {e}");
        }
    }
}

fn store(sessions: &mut HashMap<UserId, SessionState>, user_id: UserId, next: SessionState) {
    match next {
        SessionState::Idle => {
            sessions.remove(&user_id);
        }
        other => {
            sessions.insert(user_id, other);
        }
    }
}
