use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::{Task, TaskId, TaskStatus};

pub type ColumnId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Status applied to tasks that land in this column.
    pub status: TaskStatus,
    pub color: String,
    pub task_limit: Option<u32>,
    /// Task order is position: index 0 renders at the top of the lane.
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(title: String, status: TaskStatus, color: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            status,
            color,
            task_limit: None,
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn set_task_limit(&mut self, limit: Option<u32>) {
        self.task_limit = limit;
        self.updated_at = Utc::now();
    }

    pub fn update_color(&mut self, color: String) {
        self.color = color;
        self.updated_at = Utc::now();
    }

    pub fn is_at_limit(&self) -> bool {
        self.task_limit
            .is_some_and(|limit| self.tasks.len() >= limit as usize)
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }

    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    /// Insert at `position`, clamped to the current task count.
    pub fn insert_task(&mut self, position: usize, task: Task) {
        let position = position.min(self.tasks.len());
        self.tasks.insert(position, task);
        self.updated_at = Utc::now();
    }

    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.updated_at = Utc::now();
    }

    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let position = self.position_of(task_id)?;
        let task = self.tasks.remove(position);
        self.updated_at = Utc::now();
        Some(task)
    }

    pub fn task_order(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|t| t.id).collect()
    }

    /// Reorder tasks to follow `ordered`. Unknown ids are ignored; tasks
    /// missing from `ordered` keep their relative order at the tail.
    pub fn set_task_order(&mut self, ordered: &[TaskId]) {
        let mut reordered: Vec<Task> = Vec::with_capacity(self.tasks.len());
        for id in ordered {
            if let Some(pos) = self.tasks.iter().position(|t| t.id == *id) {
                reordered.push(self.tasks.remove(pos));
            }
        }
        reordered.append(&mut self.tasks);
        self.tasks = reordered;
        self.updated_at = Utc::now();
    }
}
