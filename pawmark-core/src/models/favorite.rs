use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved type/value pair (dog image URL, cat fact text, breed image URL).
/// `id` and `created_at` are store-assigned and immutable; `created_at` is
/// used only for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: Uuid,
    /// Category label. Column and wire name are both `type`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}
