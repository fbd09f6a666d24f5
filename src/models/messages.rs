use crate::entities::messages::Message as MessageEntity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub message_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            message_id: value.id,
            content: value.content,
            created_at: value.created_at,
        }
    }
}

/// A message as the index page shows it.
#[derive(Serialize)]
pub struct MessageView<'a> {
    pub id: i32,
    pub content: &'a str,
    pub created_at: String,
}

impl<'a> From<&'a Message> for MessageView<'a> {
    fn from(value: &'a Message) -> Self {
        Self {
            id: value.message_id,
            content: &value.content,
            created_at: value.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct AddMessageForm {
    #[serde(default)]
    pub content: String,
}
