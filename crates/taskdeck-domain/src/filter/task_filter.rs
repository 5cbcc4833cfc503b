//! Task filter predicates.
//!
//! Provides the TaskFilter trait and the predicate implementations used by
//! the board and dashboard query pipelines.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::filter::filter_state::DateRange;
use crate::task::{Task, TaskPriority, TaskStatus};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter tasks by exact priority.
pub struct PriorityFilter {
    priority: TaskPriority,
}

impl PriorityFilter {
    pub fn new(priority: TaskPriority) -> Self {
        Self { priority }
    }
}

impl TaskFilter for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        task.priority == self.priority
    }
}

/// Filter tasks assigned to a specific person.
pub struct AssigneeFilter {
    assignee: String,
}

impl AssigneeFilter {
    pub fn new(assignee: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
        }
    }
}

impl TaskFilter for AssigneeFilter {
    fn matches(&self, task: &Task) -> bool {
        task.assignees.iter().any(|a| a == &self.assignee)
    }
}

/// Filter tasks carrying all of the selected tags.
///
/// An empty selection matches every task.
pub struct TagSubsetFilter {
    tags: HashSet<String>,
}

impl TagSubsetFilter {
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl TaskFilter for TagSubsetFilter {
    fn matches(&self, task: &Task) -> bool {
        self.tags
            .iter()
            .all(|tag| task.tags.iter().any(|t| t == tag))
    }
}

/// Filter tasks whose due date falls inside a range (inclusive bounds).
///
/// While the range is active, tasks without a due date never match.
pub struct DueRangeFilter {
    range: DateRange,
}

impl DueRangeFilter {
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }
}

impl TaskFilter for DueRangeFilter {
    fn matches(&self, task: &Task) -> bool {
        task.due_date.is_some_and(|due| self.range.contains(due))
    }
}

/// Filter tasks whose creation date falls inside a range (inclusive bounds).
pub struct CreatedRangeFilter {
    range: DateRange,
}

impl CreatedRangeFilter {
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }
}

impl TaskFilter for CreatedRangeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.range.contains(task.created_at)
    }
}

/// Filter tasks created at or after a cutoff instant.
///
/// Backs the dashboard's coarse time-range selector.
pub struct CreatedWithinFilter {
    cutoff: DateTime<Utc>,
}

impl CreatedWithinFilter {
    pub fn new(cutoff: DateTime<Utc>) -> Self {
        Self { cutoff }
    }
}

impl TaskFilter for CreatedWithinFilter {
    fn matches(&self, task: &Task) -> bool {
        task.created_at >= self.cutoff
    }
}

/// Filter tasks whose status is in the selected set.
///
/// An empty selection matches every task.
pub struct StatusSetFilter {
    statuses: HashSet<TaskStatus>,
}

impl StatusSetFilter {
    pub fn new(statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
        }
    }
}

impl TaskFilter for StatusSetFilter {
    fn matches(&self, task: &Task) -> bool {
        if self.statuses.is_empty() {
            return true;
        }
        self.statuses.contains(&task.status)
    }
}

/// Combine multiple filters with AND logic.
///
/// A task matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        // Empty filter matches all tasks
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().all(|f| f.matches(task))
    }
}
