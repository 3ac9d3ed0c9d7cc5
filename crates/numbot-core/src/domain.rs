/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a sent message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// Identity of the person talking to the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Requester {
    pub id: UserId,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

impl Requester {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            full_name: None,
        }
    }

    /// `@username` when available, otherwise `@Full Name`, otherwise `@<id>`.
    pub fn handle(&self) -> String {
        let name = self
            .username
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.full_name.as_deref().filter(|s| !s.trim().is_empty()));
        match name {
            Some(n) => format!("@{n}"),
            None => format!("@{}", self.id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_prefers_username() {
        let r = Requester {
            id: UserId(7),
            username: Some("natalia".to_string()),
            full_name: Some("Наталья".to_string()),
        };
        assert_eq!(r.handle(), "@natalia");
    }

    #[test]
    fn handle_falls_back_to_full_name_then_id() {
        let mut r = Requester::new(UserId(7));
        r.full_name = Some("Наталья К".to_string());
        assert_eq!(r.handle(), "@Наталья К");

        r.full_name = None;
        assert_eq!(r.handle(), "@7");
    }
}
