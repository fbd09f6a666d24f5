use chrono::NaiveDateTime;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
}
