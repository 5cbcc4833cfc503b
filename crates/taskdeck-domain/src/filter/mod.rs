//! Task filtering.
//!
//! `task_filter` holds the predicate types (how to filter), `filter_state`
//! holds the two per-context filter configurations and their action enums
//! (what to filter by).

pub mod filter_state;
pub mod task_filter;

pub use filter_state::{
    BoardFilterAction, BoardFilters, DashboardFilterAction, DashboardFilters, DateRange,
    FilterContext, FilterState, TimeRange,
};
pub use task_filter::{
    AssigneeFilter, CompositeFilter, CreatedRangeFilter, CreatedWithinFilter, DueRangeFilter,
    PriorityFilter, StatusSetFilter, TagSubsetFilter, TaskFilter,
};
