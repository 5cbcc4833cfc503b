//! Task sorting.
//!
//! Enum-dispatched comparators plus an order wrapper. All sorts are stable,
//! so tasks that compare equal keep their board position order — clearing
//! filters under the default sort restores the exact original ordering.

use crate::task::Task;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Sort key selectable in the board-view filters.
///
/// `Default` leaves the board position order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Default,
    CreatedAt,
    DueDate,
    Priority,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Enum dispatch for comparing tasks by a specific field.
pub enum SortBy {
    /// Every pair compares equal; stable sort keeps the incoming order.
    Unsorted,
    CreatedAt,
    DueDate,
    Priority,
    Title,
}

impl SortBy {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Unsorted => Ordering::Equal,
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::DueDate => match (a.due_date, b.due_date) {
                (Some(ad), Some(bd)) => ad.cmp(&bd),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Priority => a.priority.rank().cmp(&b.priority.rank()),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

/// Wrapper that applies sort order (ascending/descending) to a sort field.
pub struct OrderedSorter {
    sorter: SortBy,
    order: SortOrder,
}

impl OrderedSorter {
    pub fn new(sorter: SortBy, order: SortOrder) -> Self {
        Self { sorter, order }
    }

    /// Sort a slice in place. Works with both `&Task` and `Task` elements.
    pub fn sort<T: Borrow<Task>>(&self, tasks: &mut [T]) {
        tasks.sort_by(|a, b| {
            let cmp = self.sorter.compare(a.borrow(), b.borrow());
            match self.order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
    }
}

/// Get the appropriate sorter for a sort field.
pub fn get_sorter_for_field(field: SortField) -> SortBy {
    match field {
        SortField::Default => SortBy::Unsorted,
        SortField::CreatedAt => SortBy::CreatedAt,
        SortField::DueDate => SortBy::DueDate,
        SortField::Priority => SortBy::Priority,
        SortField::Title => SortBy::Title,
    }
}
