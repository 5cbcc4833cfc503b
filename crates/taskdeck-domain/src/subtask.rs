use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SubtaskId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Subtask {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
