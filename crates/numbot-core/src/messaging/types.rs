/// Persistent keyboard shown under the input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
    pub resize: bool,
}

impl ReplyKeyboard {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows, resize: true }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// Inline keyboard (buttons attached to a message) that fires callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    pub fn single(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            buttons: vec![InlineButton {
                label: label.into(),
                callback_data: callback_data.into(),
            }],
        }
    }
}

/// Markup attached to an outgoing message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReplyMarkup {
    /// Leave whatever keyboard the client currently shows.
    #[default]
    None,
    Reply(ReplyKeyboard),
    Inline(InlineKeyboard),
}

impl ReplyMarkup {
    pub fn inline(&self) -> Option<&InlineKeyboard> {
        match self {
            Self::Inline(k) => Some(k),
            _ => None,
        }
    }

    pub fn reply(&self) -> Option<&ReplyKeyboard> {
        match self {
            Self::Reply(k) => Some(k),
            _ => None,
        }
    }
}
