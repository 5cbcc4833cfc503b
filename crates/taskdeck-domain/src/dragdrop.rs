//! Drag-and-drop resolution.
//!
//! Translates a drag-end event from the host's drag primitive into one of
//! three board mutations: reorder columns, move a task across columns, or
//! reorder tasks within a column. Resolution is pure; the returned command
//! is executed through the normal command path. Stale or incomplete events
//! resolve to `None` and change nothing.

use crate::board::Board;
use crate::column::ColumnId;
use crate::commands::{Command, MoveTaskToColumn, SetColumnOrder, SetTaskOrder};
use crate::task::TaskId;

/// A draggable entity, as reported by the drag primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    Column(ColumnId),
    Task(TaskId),
}

/// A drag-end event. `over` is the item under the pointer at release,
/// or `None` when the drop happened outside any target.
#[derive(Debug, Clone, Copy)]
pub struct DragEvent {
    pub source: DragItem,
    pub over: Option<DragItem>,
}

/// The mutation a drag resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragCommand {
    ReorderColumns {
        board_id: crate::BoardId,
        ordered: Vec<ColumnId>,
    },
    MoveTask {
        task_id: TaskId,
        column_id: ColumnId,
        position: usize,
    },
    ReorderTasks {
        column_id: ColumnId,
        ordered: Vec<TaskId>,
    },
}

impl DragCommand {
    /// Convert into an executable domain command.
    pub fn into_command(self) -> Box<dyn Command> {
        match self {
            DragCommand::ReorderColumns { board_id, ordered } => {
                Box::new(SetColumnOrder { board_id, ordered })
            }
            DragCommand::MoveTask {
                task_id,
                column_id,
                position,
            } => Box::new(MoveTaskToColumn {
                task_id,
                column_id,
                position,
            }),
            DragCommand::ReorderTasks { column_id, ordered } => {
                Box::new(SetTaskOrder { column_id, ordered })
            }
        }
    }
}

/// Remove `id` from the order and reinsert it at the destination's index.
fn reinsert<T: Copy + PartialEq>(mut order: Vec<T>, from: usize, to: usize) -> Vec<T> {
    let id = order.remove(from);
    order.insert(to, id);
    order
}

/// Resolve a drag-end event against the current board layout.
///
/// Returns `None` when the event requires no mutation: no drop target,
/// source dropped on itself, or either end referencing an entity the board
/// no longer holds.
pub fn resolve_drag(board: &Board, event: &DragEvent) -> Option<DragCommand> {
    let over = event.over?;

    match (event.source, over) {
        (DragItem::Column(source_id), DragItem::Column(over_id)) => {
            if source_id == over_id {
                return None;
            }
            let order = board.column_order();
            let from = order.iter().position(|id| *id == source_id)?;
            let to = order.iter().position(|id| *id == over_id)?;
            Some(DragCommand::ReorderColumns {
                board_id: board.id,
                ordered: reinsert(order, from, to),
            })
        }
        // A column dropped on a task has no defined meaning.
        (DragItem::Column(_), DragItem::Task(_)) => None,
        (DragItem::Task(task_id), over) => {
            let source_column = board.find_column_of_task(task_id)?;
            match over {
                DragItem::Column(over_id) => {
                    if over_id == source_column.id {
                        return None;
                    }
                    board.find_column(over_id)?;
                    // Dropping on a column header puts the task on top.
                    Some(DragCommand::MoveTask {
                        task_id,
                        column_id: over_id,
                        position: 0,
                    })
                }
                DragItem::Task(over_task_id) => {
                    if over_task_id == task_id {
                        return None;
                    }
                    let over_column = board.find_column_of_task(over_task_id)?;
                    if over_column.id == source_column.id {
                        let order = source_column.task_order();
                        let from = order.iter().position(|id| *id == task_id)?;
                        let to = order.iter().position(|id| *id == over_task_id)?;
                        Some(DragCommand::ReorderTasks {
                            column_id: source_column.id,
                            ordered: reinsert(order, from, to),
                        })
                    } else {
                        // Dropping onto a task in another column behaves like
                        // dropping on that column.
                        Some(DragCommand::MoveTask {
                            task_id,
                            column_id: over_column.id,
                            position: 0,
                        })
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use uuid::Uuid;

    fn board_with_tasks() -> Board {
        let mut board = Board::with_default_columns("Test".to_string(), None);
        for title in ["t1", "t2", "t3"] {
            board.columns[0].push_task(Task::new(title.to_string()));
        }
        board.columns[2].push_task(Task::new("d1".to_string()));
        board
    }

    #[test]
    fn test_drop_without_target_is_noop() {
        let board = board_with_tasks();
        let event = DragEvent {
            source: DragItem::Column(board.columns[0].id),
            over: None,
        };
        assert_eq!(resolve_drag(&board, &event), None);
    }

    #[test]
    fn test_column_reorder() {
        // Columns [A,B,C]: dragging C onto A yields [C,A,B].
        let board = board_with_tasks();
        let ids = board.column_order();
        let event = DragEvent {
            source: DragItem::Column(ids[2]),
            over: Some(DragItem::Column(ids[0])),
        };

        let command = resolve_drag(&board, &event).unwrap();
        assert_eq!(
            command,
            DragCommand::ReorderColumns {
                board_id: board.id,
                ordered: vec![ids[2], ids[0], ids[1]],
            }
        );
    }

    #[test]
    fn test_column_dropped_on_itself_is_noop() {
        let board = board_with_tasks();
        let id = board.columns[1].id;
        let event = DragEvent {
            source: DragItem::Column(id),
            over: Some(DragItem::Column(id)),
        };
        assert_eq!(resolve_drag(&board, &event), None);
    }

    #[test]
    fn test_task_dropped_on_other_column_goes_on_top() {
        let board = board_with_tasks();
        let task_id = board.columns[0].tasks[0].id;
        let done_id = board.columns[2].id;
        let event = DragEvent {
            source: DragItem::Task(task_id),
            over: Some(DragItem::Column(done_id)),
        };

        let command = resolve_drag(&board, &event).unwrap();
        assert_eq!(
            command,
            DragCommand::MoveTask {
                task_id,
                column_id: done_id,
                position: 0,
            }
        );
    }

    #[test]
    fn test_task_reorder_within_column() {
        let board = board_with_tasks();
        let order = board.columns[0].task_order();
        let event = DragEvent {
            source: DragItem::Task(order[2]),
            over: Some(DragItem::Task(order[0])),
        };

        let command = resolve_drag(&board, &event).unwrap();
        assert_eq!(
            command,
            DragCommand::ReorderTasks {
                column_id: board.columns[0].id,
                ordered: vec![order[2], order[0], order[1]],
            }
        );
    }

    #[test]
    fn test_task_dropped_on_task_in_other_column_moves() {
        let board = board_with_tasks();
        let task_id = board.columns[0].tasks[1].id;
        let over_task = board.columns[2].tasks[0].id;
        let event = DragEvent {
            source: DragItem::Task(task_id),
            over: Some(DragItem::Task(over_task)),
        };

        let command = resolve_drag(&board, &event).unwrap();
        assert_eq!(
            command,
            DragCommand::MoveTask {
                task_id,
                column_id: board.columns[2].id,
                position: 0,
            }
        );
    }

    #[test]
    fn test_stale_source_is_noop() {
        let board = board_with_tasks();
        let event = DragEvent {
            source: DragItem::Task(Uuid::new_v4()),
            over: Some(DragItem::Column(board.columns[1].id)),
        };
        assert_eq!(resolve_drag(&board, &event), None);
    }

    #[test]
    fn test_stale_destination_is_noop() {
        let board = board_with_tasks();
        let task_id = board.columns[0].tasks[0].id;
        let event = DragEvent {
            source: DragItem::Task(task_id),
            over: Some(DragItem::Column(Uuid::new_v4())),
        };
        assert_eq!(resolve_drag(&board, &event), None);
    }

    #[test]
    fn test_end_to_end_move_sets_status() {
        // Task in todo dropped onto done: status flips, lands at index 0.
        let board = board_with_tasks();
        let task_id = board.columns[0].tasks[0].id;
        let done_id = board.columns[2].id;
        let event = DragEvent {
            source: DragItem::Task(task_id),
            over: Some(DragItem::Column(done_id)),
        };
        let command = resolve_drag(&board, &event).unwrap().into_command();

        let mut boards = vec![board];
        let mut context = crate::commands::CommandContext {
            boards: &mut boards,
        };
        command.execute(&mut context).unwrap();

        let moved = &boards[0].columns[2].tasks[0];
        assert_eq!(moved.id, task_id);
        assert_eq!(moved.status, crate::task::TaskStatus::Done);
    }
}
