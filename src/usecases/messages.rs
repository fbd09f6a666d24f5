use crate::common::context::Context;
use crate::common::database::StoreError;
use crate::models::messages::Message;
use tracing::{debug, error};

/// Trims surrounding whitespace, `None` when nothing is left.
pub fn normalize_content(raw: &str) -> Option<&str> {
    let content = raw.trim();
    (!content.is_empty()).then_some(content)
}

/// Every stored message, newest first. Storage failures yield an empty list.
pub async fn fetch_all<C: Context>(ctx: &C) -> Vec<Message> {
    match ctx.messages().fetch_all().await {
        Ok(messages) => messages.into_iter().map(Message::from).collect(),
        Err(StoreError::Unavailable) => Vec::new(),
        Err(e) => {
            error!("Error fetching messages: {e}");
            Vec::new()
        }
    }
}

/// Stores the trimmed content. Blank input and storage failures are silently dropped.
pub async fn add<C: Context>(ctx: &C, raw_content: &str) {
    let Some(content) = normalize_content(raw_content) else {
        debug!("Ignoring empty message");
        return;
    };
    match ctx.messages().insert(content).await {
        Ok(()) => {}
        Err(StoreError::Unavailable) => {}
        Err(e) => error!("Error adding message: {e}"),
    }
}
