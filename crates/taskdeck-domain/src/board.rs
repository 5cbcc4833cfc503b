use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId, TaskStatus};

pub type BoardId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub description: Option<String>,
    /// Column order is position: index 0 renders leftmost.
    #[serde(default)]
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            columns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A board seeded with the stock To Do / In Progress / Done lanes.
    pub fn with_default_columns(title: String, description: Option<String>) -> Self {
        let mut board = Self::new(title, description);
        board.columns = vec![
            Column::new("To Do".to_string(), TaskStatus::Todo, "#e2e8f0".to_string()),
            Column::new(
                "In Progress".to_string(),
                TaskStatus::InProgress,
                "#bfdbfe".to_string(),
            ),
            Column::new("Done".to_string(), TaskStatus::Done, "#bbf7d0".to_string()),
        ];
        board
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn find_column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn find_column_mut(&mut self, column_id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .find_map(|c| c.tasks.iter().find(|t| t.id == task_id))
    }

    pub fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .find_map(|c| c.tasks.iter_mut().find(|t| t.id == task_id))
    }

    /// The column currently holding a task, found by containment scan.
    pub fn find_column_of_task(&self, task_id: TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains(task_id))
    }

    pub fn column_order(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id).collect()
    }

    /// Reorder columns to follow `ordered`. Unknown ids are ignored; columns
    /// missing from `ordered` keep their relative order at the tail.
    pub fn set_column_order(&mut self, ordered: &[ColumnId]) {
        let mut reordered: Vec<Column> = Vec::with_capacity(self.columns.len());
        for id in ordered {
            if let Some(pos) = self.columns.iter().position(|c| c.id == *id) {
                reordered.push(self.columns.remove(pos));
            }
        }
        reordered.append(&mut self.columns);
        self.columns = reordered;
        self.updated_at = Utc::now();
    }

    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
