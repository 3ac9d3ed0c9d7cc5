use std::sync::Arc;

use teloxide::{
    dispatching::Dispatcher,
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    update_listeners::webhooks,
};

use numbot_core::{
    bot::NumerologyBot,
    config::{Config, Delivery},
    descriptions::DescriptionTable,
    messaging::port::MessagingPort,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NumerologyBot>,
}

/// Build the bot service and dispatch updates until the listener stops.
pub async fn run(cfg: Arc<Config>, table: Arc<DescriptionTable>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!(username = %me.username(), "numbot started"),
        Err(e) => tracing::warn!("get_me failed: {e}"),
    }
    tracing::info!(
        descriptions = table.len(),
        admin_chat_id = cfg.admin_chat_id.0,
        "configuration loaded"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let service = Arc::new(NumerologyBot::new(table, cfg.admin_chat_id, messenger));

    let state = Arc::new(AppState { service });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![state])
        .build();

    match &cfg.delivery {
        Delivery::LongPolling => {
            tracing::info!("delivery: long polling");
            dispatcher.dispatch().await;
        }
        Delivery::Webhook { url, listen } => {
            tracing::info!(%listen, "delivery: webhook");
            let url = reqwest::Url::parse(url)?;
            let listener = webhooks::axum(bot, webhooks::Options::new(*listen, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("webhook listener error"),
                )
                .await;
        }
    }

    tracing::info!("numbot stopped");
    Ok(())
}
