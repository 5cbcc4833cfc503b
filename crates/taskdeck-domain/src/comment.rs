use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CommentId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            body,
            created_at: Utc::now(),
        }
    }
}
