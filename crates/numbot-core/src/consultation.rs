use chrono::{DateTime, Local};

use crate::{domain::Requester, menu::Topic};

/// Notification relayed to the administrator; built on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub topic: Topic,
    pub requester: Requester,
    pub requested_at: DateTime<Local>,
}

impl ConsultationRequest {
    pub fn new(topic: Topic, requester: Requester) -> Self {
        Self::at(topic, requester, Local::now())
    }

    pub fn at(topic: Topic, requester: Requester, requested_at: DateTime<Local>) -> Self {
        Self {
            topic,
            requester,
            requested_at,
        }
    }

    /// Plain-text message sent to the administrator chat.
    pub fn admin_message(&self) -> String {
        format!(
            "📩 Запрос на консультацию\nРаздел: {}\nПользователь: {}\nID: {}\nВремя: {}",
            self.topic.label(),
            self.requester.handle(),
            self.requester.id.0,
            self.requested_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::UserId;

    #[test]
    fn admin_message_lists_topic_user_and_time() {
        let requester = Requester {
            id: UserId(555),
            username: Some("anna".to_string()),
            full_name: None,
        };
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 59).unwrap();
        let req = ConsultationRequest::at(Topic::Health, requester, at);

        assert_eq!(
            req.admin_message(),
            format!(
                "📩 Запрос на консультацию\nРаздел: {}\nПользователь: @anna\nID: 555\nВремя: 2024-03-09 14:05",
                Topic::Health.label()
            )
        );
    }
}
