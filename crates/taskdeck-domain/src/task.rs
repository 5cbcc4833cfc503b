use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comment::Comment;
use crate::field_update::FieldUpdate;
use crate::subtask::Subtask;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Lowest,
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Numeric rank for sorting; higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            TaskPriority::Lowest => 0,
            TaskPriority::Low => 1,
            TaskPriority::Medium => 2,
            TaskPriority::High => 3,
            TaskPriority::Urgent => 4,
        }
    }
}

/// Task status. The unit variants cover the stock board columns; statuses
/// coming from user-defined columns round-trip through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    #[serde(untagged)]
    Custom(String),
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignees: Vec::new(),
            tags: Vec::new(),
            due_date: None,
            subtasks: Vec::new(),
            comments: Vec::new(),
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn update_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
        self.updated_at = Utc::now();
    }

    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
        self.updated_at = Utc::now();
    }

    /// Add a tag. Tags behave as a set; duplicates are ignored.
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
            self.updated_at = Utc::now();
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.tags.len() != before {
            self.updated_at = Utc::now();
        }
    }

    pub fn assign(&mut self, assignee: String) {
        if !self.assignees.contains(&assignee) {
            self.assignees.push(assignee);
            self.updated_at = Utc::now();
        }
    }

    pub fn unassign(&mut self, assignee: &str) {
        let before = self.assignees.len();
        self.assignees.retain(|a| a != assignee);
        if self.assignees.len() != before {
            self.updated_at = Utc::now();
        }
    }

    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    pub fn restore(&mut self) {
        self.archived = false;
        self.updated_at = Utc::now();
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_done() && self.due_date.is_some_and(|due| due < now)
    }

    pub fn add_subtask(&mut self, title: String) -> crate::SubtaskId {
        let subtask = Subtask::new(title);
        let id = subtask.id;
        self.subtasks.push(subtask);
        self.updated_at = Utc::now();
        id
    }

    /// Toggle a subtask's completion. Returns false if the id is unknown.
    pub fn toggle_subtask(&mut self, subtask_id: crate::SubtaskId) -> bool {
        match self.subtasks.iter_mut().find(|s| s.id == subtask_id) {
            Some(subtask) => {
                subtask.toggle();
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn remove_subtask(&mut self, subtask_id: crate::SubtaskId) -> bool {
        let before = self.subtasks.len();
        self.subtasks.retain(|s| s.id != subtask_id);
        let removed = self.subtasks.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Completed and total subtask counts.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let completed = self.subtasks.iter().filter(|s| s.completed).count();
        (completed, self.subtasks.len())
    }

    pub fn add_comment(&mut self, author: String, body: String) -> crate::CommentId {
        let comment = Comment::new(author, body);
        let id = comment.id;
        self.comments.push(comment);
        self.updated_at = Utc::now();
        id
    }

    pub fn remove_comment(&mut self, comment_id: crate::CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != comment_id);
        let removed = self.comments.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Apply a partial update. `NoChange` fields keep their current value.
    pub fn apply_update(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        update.description.apply_to(&mut self.description);
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(assignees) = update.assignees {
            self.assignees = assignees;
        }
        if let Some(tags) = update.tags {
            self.tags.clear();
            for tag in tags {
                if !self.tags.contains(&tag) {
                    self.tags.push(tag);
                }
            }
        }
        update.due_date.apply_to(&mut self.due_date);
        self.updated_at = Utc::now();
    }
}

/// Partial update for a task. Absent fields are left untouched; optional
/// fields distinguish "set" from "clear" via `FieldUpdate`.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignees: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
}
