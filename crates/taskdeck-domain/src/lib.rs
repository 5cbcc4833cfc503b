pub mod board;
pub mod column;
pub mod comment;
pub mod commands;
pub mod dragdrop;
pub mod field_update;
pub mod filter;
pub mod metrics;
pub mod query;
pub mod search;
pub mod snapshot;
pub mod sort;
pub mod subtask;
pub mod task;

pub use board::{Board, BoardId};
pub use column::{Column, ColumnId};
pub use comment::{Comment, CommentId};
pub use dragdrop::{DragCommand, DragEvent, DragItem};
pub use field_update::FieldUpdate;
pub use filter::{
    BoardFilterAction, BoardFilters, DashboardFilterAction, DashboardFilters, DateRange,
    FilterContext, FilterState, TimeRange,
};
pub use metrics::DashboardMetrics;
pub use snapshot::WorkspaceSnapshot;
pub use sort::{SortField, SortOrder};
pub use subtask::{Subtask, SubtaskId};
pub use task::{Task, TaskId, TaskPriority, TaskStatus, TaskUpdate};
