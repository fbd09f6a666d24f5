use crate::common::database::{ConnectionProvider, StoreResult};
use crate::entities::messages::Message;
use async_trait::async_trait;

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "id, content, created_at";

/// Persistent storage for messages. Messages are create-only.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Idempotently creates the messages table.
    async fn create_table(&self) -> StoreResult<()>;

    /// All messages, newest first. Equal timestamps are ordered by id, newest first.
    async fn fetch_all(&self) -> StoreResult<Vec<Message>>;

    /// Stores `content` as-is; the timestamp and id are assigned by storage.
    async fn insert(&self, content: &str) -> StoreResult<()>;
}

pub struct PgMessageStore {
    db: ConnectionProvider,
}

impl PgMessageStore {
    pub fn new(db: ConnectionProvider) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn create_table(&self) -> StoreResult<()> {
        const QUERY: &str = const_str::concat!(
            "CREATE TABLE IF NOT EXISTS ",
            TABLE_NAME,
            " (id SERIAL PRIMARY KEY, ",
            "content TEXT NOT NULL, ",
            "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)"
        );
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(QUERY).execute(&mut conn).await;
        self.db.release(conn).await;
        result?;
        Ok(())
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Message>> {
        const QUERY: &str = const_str::concat!(
            "SELECT ",
            READ_FIELDS,
            " FROM ",
            TABLE_NAME,
            " ORDER BY created_at DESC, id DESC"
        );
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query_as::<_, Message>(QUERY).fetch_all(&mut conn).await;
        self.db.release(conn).await;
        Ok(result?)
    }

    async fn insert(&self, content: &str) -> StoreResult<()> {
        const QUERY: &str =
            const_str::concat!("INSERT INTO ", TABLE_NAME, " (content) VALUES ($1)");
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(QUERY).bind(content).execute(&mut conn).await;
        self.db.release(conn).await;
        result?;
        Ok(())
    }
}
