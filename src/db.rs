use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub type DbPool = Pool<Postgres>;

/// A stored guestbook entry. Rows are append-only: the id is assigned at
/// insert time and the record is never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub name: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Inserts a message with a freshly generated id. Absent fields are stored
/// as NULL rather than rejected.
pub async fn insert_message(
    pool: &DbPool,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<Message, sqlx::Error> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (name, message)
        VALUES ($1, $2)
        RETURNING id, name, message, created_at
        "#,
    )
    .bind(name)
    .bind(message)
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// Returns every stored message in insertion order. No pagination.
pub async fn list_messages(pool: &DbPool) -> Result<Vec<Message>, sqlx::Error> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, name, message, created_at
        FROM messages
        ORDER BY seq
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Exact-match lookup by id, returned as a list of zero or one elements.
/// An id that does not parse as a UUID matches nothing, so malformed ids
/// follow the same empty-result path as unknown ids.
pub async fn find_message_by_id(pool: &DbPool, id: &str) -> Result<Vec<Message>, sqlx::Error> {
    let id = match Uuid::parse_str(id) {
        Ok(id) => id,
        Err(_) => return Ok(Vec::new()),
    };

    let message = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, name, message, created_at
        FROM messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(message.into_iter().collect())
}
