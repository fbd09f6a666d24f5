#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use chrono::Utc;
use http_body_util::BodyExt;
use message_board::api;
use message_board::common::database::{ConnectionProvider, StoreResult};
use message_board::common::state::AppState;
use message_board::entities::messages::Message;
use message_board::repositories::messages::{MessageStore, PgMessageStore};
use message_board::settings::AppSettings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Behaves like the messages table, minus the database.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn create_table(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Message>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn insert(&self, content: &str) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(Message {
            id,
            content: content.to_owned(),
            created_at: Utc::now().naive_utc(),
        });
        Ok(())
    }
}

pub fn settings(overrides: &[(&str, &str)]) -> Arc<AppSettings> {
    let source: HashMap<&str, &str> = overrides.iter().copied().collect();
    Arc::new(AppSettings::load_from(&source).unwrap())
}

pub fn app_with(store: Arc<dyn MessageStore>) -> Router {
    let state = AppState::new(settings(&[]), store).unwrap();
    api::router().with_state(state)
}

/// Points at a port nothing listens on.
pub fn unreachable_app() -> Router {
    let settings = settings(&[("DB_HOST", "127.0.0.1"), ("DB_PORT", "1")]);
    let provider = ConnectionProvider::new(settings.database.clone());
    let state = AppState::new(settings, Arc::new(PgMessageStore::new(provider))).unwrap();
    api::router().with_state(state)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
