use crate::repositories::messages::MessageStore;
use crate::settings::AppSettings;
use tracing::{error, info};

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

/// Best effort: startup continues whether or not the table could be created.
pub async fn initialize_schema(messages: &dyn MessageStore) -> bool {
    match messages.create_table().await {
        Ok(()) => {
            info!("Database initialized successfully");
            true
        }
        Err(e) => {
            error!("Database initialization error: {e}");
            false
        }
    }
}
