//! Filter configuration state.
//!
//! Two independent filter contexts (board view and dashboard view) derive
//! from the same underlying board collection. Each context owns its own
//! configuration and is updated through a closed action enum, so every
//! possible transition is spelled out and exhaustively matched.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use crate::board::BoardId;
use crate::sort::{SortField, SortOrder};
use crate::task::{TaskPriority, TaskStatus};

/// Date range with optional inclusive bounds. An unset bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| instant >= start)
            && self.end.map_or(true, |end| instant <= end)
    }
}

/// Coarse activity window for the dashboard view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    Last7Days,
    Last30Days,
    Last90Days,
    LastYear,
    #[default]
    All,
}

impl TimeRange {
    /// The cutoff instant for this window, or `None` for `All`.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            TimeRange::Last7Days => 7,
            TimeRange::Last30Days => 30,
            TimeRange::Last90Days => 90,
            TimeRange::LastYear => 365,
            TimeRange::All => return None,
        };
        Some(now - Duration::days(days))
    }
}

/// One of the two independent filter contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterContext {
    Board,
    Dashboard,
}

/// Filter configuration for the board view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardFilters {
    /// Free-text query matched against title, description, and tags.
    pub query: String,
    /// Scope to a single board.
    pub board_id: Option<BoardId>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    /// Tasks must carry all selected tags.
    pub tags: HashSet<String>,
    /// Due-date range; tasks without a due date are excluded while active.
    pub due_range: Option<DateRange>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl BoardFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff any field differs from the defaults.
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Filter configuration for the dashboard view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardFilters {
    pub board_id: Option<BoardId>,
    /// Creation-date range; both bounds inclusive.
    pub date_range: Option<DateRange>,
    /// Tasks must have one of the selected statuses. Empty selects all.
    pub statuses: HashSet<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub time_range: TimeRange,
}

impl DashboardFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff any field differs from the defaults.
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// State transition for the board-view filters.
#[derive(Debug, Clone)]
pub enum BoardFilterAction {
    SetQuery(String),
    SetBoard(Option<BoardId>),
    SetPriority(Option<TaskPriority>),
    SetAssignee(Option<String>),
    SetTags(HashSet<String>),
    AddTag(String),
    RemoveTag(String),
    SetDueRange(Option<DateRange>),
    SetSort(SortField, SortOrder),
    Clear,
}

/// State transition for the dashboard-view filters.
#[derive(Debug, Clone)]
pub enum DashboardFilterAction {
    SetBoard(Option<BoardId>),
    SetDateRange(Option<DateRange>),
    SetStatuses(HashSet<TaskStatus>),
    ToggleStatus(TaskStatus),
    SetPriority(Option<TaskPriority>),
    SetAssignee(Option<String>),
    SetTimeRange(TimeRange),
    Clear,
}

/// Holds both filter contexts. Owned by the workspace and passed in
/// explicitly wherever filtering happens; there is no global instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub board: BoardFilters,
    pub dashboard: DashboardFilters,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a board-view transition. Pure state replacement; cannot fail.
    pub fn apply_board(&mut self, action: BoardFilterAction) {
        match action {
            BoardFilterAction::SetQuery(query) => self.board.query = query,
            BoardFilterAction::SetBoard(board_id) => self.board.board_id = board_id,
            BoardFilterAction::SetPriority(priority) => self.board.priority = priority,
            BoardFilterAction::SetAssignee(assignee) => self.board.assignee = assignee,
            BoardFilterAction::SetTags(tags) => self.board.tags = tags,
            BoardFilterAction::AddTag(tag) => {
                self.board.tags.insert(tag);
            }
            BoardFilterAction::RemoveTag(tag) => {
                self.board.tags.remove(&tag);
            }
            BoardFilterAction::SetDueRange(range) => self.board.due_range = range,
            BoardFilterAction::SetSort(field, order) => {
                self.board.sort_field = field;
                self.board.sort_order = order;
            }
            BoardFilterAction::Clear => self.board.clear(),
        }
    }

    /// Apply a dashboard-view transition. Pure state replacement; cannot fail.
    pub fn apply_dashboard(&mut self, action: DashboardFilterAction) {
        match action {
            DashboardFilterAction::SetBoard(board_id) => self.dashboard.board_id = board_id,
            DashboardFilterAction::SetDateRange(range) => self.dashboard.date_range = range,
            DashboardFilterAction::SetStatuses(statuses) => self.dashboard.statuses = statuses,
            DashboardFilterAction::ToggleStatus(status) => {
                if !self.dashboard.statuses.remove(&status) {
                    self.dashboard.statuses.insert(status);
                }
            }
            DashboardFilterAction::SetPriority(priority) => self.dashboard.priority = priority,
            DashboardFilterAction::SetAssignee(assignee) => self.dashboard.assignee = assignee,
            DashboardFilterAction::SetTimeRange(range) => self.dashboard.time_range = range,
            DashboardFilterAction::Clear => self.dashboard.clear(),
        }
    }

    /// Reset one context to its defaults. The other context is untouched.
    pub fn clear(&mut self, context: FilterContext) {
        match context {
            FilterContext::Board => self.board.clear(),
            FilterContext::Dashboard => self.dashboard.clear(),
        }
    }

    pub fn has_active_filters(&self, context: FilterContext) -> bool {
        match context {
            FilterContext::Board => self.board.has_active_filters(),
            FilterContext::Dashboard => self.dashboard.has_active_filters(),
        }
    }
}
