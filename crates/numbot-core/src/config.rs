use std::{
    env, fs,
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use crate::{domain::ChatId, errors::Error, Result};

/// Recipient of consultation requests when `ADMIN_CHAT_ID` is not set.
pub const DEFAULT_ADMIN_CHAT_ID: i64 = 5_786_594_975;
pub const DEFAULT_DESCRIPTIONS_PATH: &str = "numerology_data.txt";
pub const DEFAULT_PORT: u16 = 8443;

/// How updates reach the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    LongPolling,
    Webhook {
        /// Public URL Telegram posts updates to (already includes the path).
        url: String,
        /// Local address the webhook listener binds.
        listen: SocketAddr,
    },
}

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub admin_chat_id: ChatId,
    pub descriptions_path: PathBuf,
    pub delivery: Delivery,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = get("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| get("TOKEN").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let admin_chat_id = match get("ADMIN_CHAT_ID").and_then(non_empty) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(ChatId)
                .map_err(|_| Error::Config(format!("ADMIN_CHAT_ID is not a chat id: {raw}")))?,
            None => ChatId(DEFAULT_ADMIN_CHAT_ID),
        };

        let descriptions_path = get("DESCRIPTIONS_PATH")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DESCRIPTIONS_PATH));

        let port = match get("PORT").and_then(non_empty) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT is not a port number: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let webhook_host = get("WEBHOOK_URL")
            .and_then(non_empty)
            .or_else(|| get("RENDER_EXTERNAL_URL").and_then(non_empty));
        let delivery = match webhook_host {
            Some(host) => Delivery::Webhook {
                url: webhook_url(&host, &telegram_bot_token),
                listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            },
            None => Delivery::LongPolling,
        };

        Ok(Self {
            telegram_bot_token,
            admin_chat_id,
            descriptions_path,
            delivery,
        })
    }
}

/// `<host>/webhook/<token>`, tolerating a trailing slash on the host.
fn webhook_url(host: &str, token: &str) -> String {
    format!("{}/webhook/{token}", host.trim().trim_end_matches('/'))
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, unquote(v.trim()));
    }
}

fn unquote(val: &str) -> &str {
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        return &val[1..val.len() - 1];
    }
    val
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
