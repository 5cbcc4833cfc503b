//! Derived task views.
//!
//! Pure projections over the board collection: filter chains applied in a
//! fixed order, then a stable sort. Source data is never mutated and the
//! result is always a subset of the underlying tasks.

use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::filter::{
    AssigneeFilter, BoardFilters, CompositeFilter, CreatedRangeFilter, CreatedWithinFilter,
    DashboardFilters, DueRangeFilter, PriorityFilter, StatusSetFilter, TagSubsetFilter, TaskFilter,
};
use crate::search::{CompositeSearcher, TaskSearcher};
use crate::sort::{get_sorter_for_field, OrderedSorter};
use crate::task::Task;

/// Filter and sort tasks for the board view.
///
/// Applies, in order: free-text search, board scoping, priority, tag subset,
/// due-date range, assignee — then sorts by the configured field and order.
/// Archived tasks never appear in board views.
pub fn board_view<'a>(boards: &'a [Board], filters: &BoardFilters) -> Vec<&'a Task> {
    let searcher = (!filters.query.is_empty()).then(|| CompositeSearcher::all(filters.query.clone()));

    let mut composite = CompositeFilter::new();
    if let Some(priority) = filters.priority {
        composite = composite.with_filter(Box::new(PriorityFilter::new(priority)));
    }
    if !filters.tags.is_empty() {
        composite = composite.with_filter(Box::new(TagSubsetFilter::new(filters.tags.clone())));
    }
    if let Some(range) = filters.due_range {
        composite = composite.with_filter(Box::new(DueRangeFilter::new(range)));
    }
    if let Some(ref assignee) = filters.assignee {
        composite = composite.with_filter(Box::new(AssigneeFilter::new(assignee.clone())));
    }

    let mut tasks: Vec<&Task> = boards
        .iter()
        .filter(|board| filters.board_id.map_or(true, |id| board.id == id))
        .flat_map(|board| board.all_tasks())
        .filter(|task| {
            if task.archived {
                return false;
            }
            if let Some(ref searcher) = searcher {
                if !searcher.matches(task) {
                    return false;
                }
            }
            composite.matches(task)
        })
        .collect();

    let sorter = OrderedSorter::new(get_sorter_for_field(filters.sort_field), filters.sort_order);
    sorter.sort(&mut tasks);

    tasks
}

/// Filter tasks for the dashboard view.
///
/// Applies board scoping, the coarse time-range window, the explicit
/// creation-date range, status set, priority, and assignee. The result keeps
/// board position order; the dashboard renders its own groupings.
pub fn dashboard_view<'a>(
    boards: &'a [Board],
    filters: &DashboardFilters,
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    let mut composite = CompositeFilter::new();
    if let Some(cutoff) = filters.time_range.cutoff(now) {
        composite = composite.with_filter(Box::new(CreatedWithinFilter::new(cutoff)));
    }
    if let Some(range) = filters.date_range {
        composite = composite.with_filter(Box::new(CreatedRangeFilter::new(range)));
    }
    if !filters.statuses.is_empty() {
        composite = composite.with_filter(Box::new(StatusSetFilter::new(
            filters.statuses.iter().cloned(),
        )));
    }
    if let Some(priority) = filters.priority {
        composite = composite.with_filter(Box::new(PriorityFilter::new(priority)));
    }
    if let Some(ref assignee) = filters.assignee {
        composite = composite.with_filter(Box::new(AssigneeFilter::new(assignee.clone())));
    }

    boards
        .iter()
        .filter(|board| filters.board_id.map_or(true, |id| board.id == id))
        .flat_map(|board| board.all_tasks())
        .filter(|task| !task.archived && composite.matches(task))
        .collect()
}
