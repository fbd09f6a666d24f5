use crate::api::templates;
use crate::repositories::messages::MessageStore;
use crate::settings::AppSettings;
use minijinja::Environment;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub messages: Arc<dyn MessageStore>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(
        settings: Arc<AppSettings>,
        messages: Arc<dyn MessageStore>,
    ) -> Result<Self, minijinja::Error> {
        let templates = Arc::new(templates::environment()?);
        Ok(Self {
            settings,
            messages,
            templates,
        })
    }
}
