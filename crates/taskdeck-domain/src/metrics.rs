//! Dashboard aggregation.
//!
//! Computes the figures behind the metrics dashboard from a filtered task
//! view. Pure derivation over borrowed tasks.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::task::{Task, TaskPriority, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub by_status: HashMap<TaskStatus, usize>,
    pub by_priority: HashMap<TaskPriority, usize>,
    /// Completed share in [0.0, 1.0]; 0.0 for an empty view.
    pub completion_rate: f64,
}

impl DashboardMetrics {
    pub fn compute(tasks: &[&Task], now: DateTime<Utc>) -> Self {
        let mut by_status: HashMap<TaskStatus, usize> = HashMap::new();
        let mut by_priority: HashMap<TaskPriority, usize> = HashMap::new();
        let mut completed = 0;
        let mut overdue = 0;

        for task in tasks {
            *by_status.entry(task.status.clone()).or_default() += 1;
            *by_priority.entry(task.priority).or_default() += 1;
            if task.status.is_done() {
                completed += 1;
            }
            if task.is_overdue(now) {
                overdue += 1;
            }
        }

        let total = tasks.len();
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };

        Self {
            total,
            completed,
            overdue,
            by_status,
            by_priority,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_empty_view() {
        let metrics = DashboardMetrics::compute(&[], Utc::now());
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.completion_rate, 0.0);
    }

    #[test]
    fn test_counts_and_rate() {
        let now = Utc::now();
        let mut done = Task::new("done".to_string());
        done.update_status(TaskStatus::Done);
        let mut late = Task::new("late".to_string());
        late.set_due_date(Some(now - Duration::days(2)));
        late.update_priority(TaskPriority::High);
        let open = Task::new("open".to_string());

        let tasks = vec![&done, &late, &open];
        let metrics = DashboardMetrics::compute(&tasks, now);

        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.overdue, 1);
        assert_eq!(metrics.by_status[&TaskStatus::Done], 1);
        assert_eq!(metrics.by_status[&TaskStatus::Todo], 2);
        assert_eq!(metrics.by_priority[&TaskPriority::High], 1);
        assert!((metrics.completion_rate - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_done_task_is_never_overdue() {
        let now = Utc::now();
        let mut done = Task::new("done".to_string());
        done.update_status(TaskStatus::Done);
        done.set_due_date(Some(now - Duration::days(2)));

        let tasks = vec![&done];
        let metrics = DashboardMetrics::compute(&tasks, now);
        assert_eq!(metrics.overdue, 0);
    }
}
