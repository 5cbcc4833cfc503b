use super::{Command, CommandContext};
use crate::task::{Task, TaskUpdate};
use taskdeck_core::TaskdeckResult;
use uuid::Uuid;

/// Create a task at the end of a column.
///
/// The task adopts the column's status tag.
pub struct CreateTask {
    pub column_id: Uuid,
    pub title: String,
}

impl Command for CreateTask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(column) = context.find_column_mut(self.column_id) {
            let mut task = Task::new(self.title.clone());
            task.status = column.status.clone();
            column.push_task(task);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.title)
    }
}

/// Update task properties (title, description, priority, status, etc.)
pub struct UpdateTask {
    pub task_id: Uuid,
    pub updates: TaskUpdate,
}

impl Command for UpdateTask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.apply_update(self.updates.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        "Update task".to_string()
    }
}

/// Delete a task permanently.
pub struct DeleteTask {
    pub task_id: Uuid,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        for board in context.boards.iter_mut() {
            for column in board.columns.iter_mut() {
                if column.remove_task(self.task_id).is_some() {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Hide a task from board views without deleting it.
pub struct ArchiveTask {
    pub task_id: Uuid,
}

impl Command for ArchiveTask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.archive();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Archive task {}", self.task_id)
    }
}

/// Bring an archived task back into board views.
pub struct RestoreTask {
    pub task_id: Uuid,
}

impl Command for RestoreTask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.restore();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Restore task {}", self.task_id)
    }
}

/// Move a task to a column at a specific position.
///
/// The task adopts the destination column's status tag. If either end of the
/// move has gone stale the command is a no-op; the task is only lifted out of
/// its column once the destination is known to exist.
pub struct MoveTaskToColumn {
    pub task_id: Uuid,
    pub column_id: Uuid,
    pub position: usize,
}

impl Command for MoveTaskToColumn {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if !context.column_exists(self.column_id) {
            return Ok(());
        }

        let mut moved = None;
        'boards: for board in context.boards.iter_mut() {
            for column in board.columns.iter_mut() {
                if let Some(task) = column.remove_task(self.task_id) {
                    moved = Some(task);
                    break 'boards;
                }
            }
        }
        let Some(mut task) = moved else {
            return Ok(());
        };

        if let Some(column) = context.find_column_mut(self.column_id) {
            task.update_status(column.status.clone());
            column.insert_task(self.position, task);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move task {} to column {}", self.task_id, self.column_id)
    }
}

/// Replace a column's task order with the given id list.
pub struct SetTaskOrder {
    pub column_id: Uuid,
    pub ordered: Vec<Uuid>,
}

impl Command for SetTaskOrder {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(column) = context.find_column_mut(self.column_id) {
            column.set_task_order(&self.ordered);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Reorder tasks in column {}", self.column_id)
    }
}

/// Append a subtask to a task's checklist.
pub struct AddSubtask {
    pub task_id: Uuid,
    pub title: String,
}

impl Command for AddSubtask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.add_subtask(self.title.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add subtask: '{}'", self.title)
    }
}

/// Flip a subtask's completion state.
pub struct ToggleSubtask {
    pub task_id: Uuid,
    pub subtask_id: Uuid,
}

impl Command for ToggleSubtask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.toggle_subtask(self.subtask_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle subtask {}", self.subtask_id)
    }
}

pub struct RemoveSubtask {
    pub task_id: Uuid,
    pub subtask_id: Uuid,
}

impl Command for RemoveSubtask {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.remove_subtask(self.subtask_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove subtask {}", self.subtask_id)
    }
}

pub struct AddComment {
    pub task_id: Uuid,
    pub author: String,
    pub body: String,
}

impl Command for AddComment {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.add_comment(self.author.clone(), self.body.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        "Add comment".to_string()
    }
}

pub struct RemoveComment {
    pub task_id: Uuid,
    pub comment_id: Uuid,
}

impl Command for RemoveComment {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(task) = context.find_task_mut(self.task_id) {
            task.remove_comment(self.comment_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove comment {}", self.comment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::task::{TaskPriority, TaskStatus};

    fn run(command: &dyn Command, boards: &mut Vec<Board>) {
        let mut context = CommandContext { boards };
        command.execute(&mut context).unwrap();
    }

    fn seeded_board() -> Board {
        let mut board = Board::with_default_columns("B".to_string(), None);
        let mut task = Task::new("seeded".to_string());
        task.status = TaskStatus::Todo;
        board.columns[0].push_task(task);
        board
    }

    #[test]
    fn test_create_task_adopts_column_status() {
        let mut boards = vec![Board::with_default_columns("B".to_string(), None)];
        let done_column = boards[0].columns[2].id;
        run(
            &CreateTask {
                column_id: done_column,
                title: "Shipped".to_string(),
            },
            &mut boards,
        );
        assert_eq!(boards[0].columns[2].tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_update_task_missing_is_noop() {
        let mut boards = vec![seeded_board()];
        run(
            &UpdateTask {
                task_id: Uuid::new_v4(),
                updates: TaskUpdate {
                    priority: Some(TaskPriority::Urgent),
                    ..Default::default()
                },
            },
            &mut boards,
        );
        assert_eq!(boards[0].columns[0].tasks[0].priority, TaskPriority::Medium);
    }

    #[test]
    fn test_move_task_sets_status_and_position() {
        let mut boards = vec![seeded_board()];
        let task_id = boards[0].columns[0].tasks[0].id;
        let done_column = boards[0].columns[2].id;
        boards[0].columns[2].push_task(Task::new("existing".to_string()));

        run(
            &MoveTaskToColumn {
                task_id,
                column_id: done_column,
                position: 0,
            },
            &mut boards,
        );

        assert!(boards[0].columns[0].tasks.is_empty());
        assert_eq!(boards[0].columns[2].tasks[0].id, task_id);
        assert_eq!(boards[0].columns[2].tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_move_task_to_missing_column_keeps_task() {
        let mut boards = vec![seeded_board()];
        let task_id = boards[0].columns[0].tasks[0].id;

        run(
            &MoveTaskToColumn {
                task_id,
                column_id: Uuid::new_v4(),
                position: 0,
            },
            &mut boards,
        );

        assert_eq!(boards[0].columns[0].tasks.len(), 1);
    }

    #[test]
    fn test_archive_and_restore() {
        let mut boards = vec![seeded_board()];
        let task_id = boards[0].columns[0].tasks[0].id;

        run(&ArchiveTask { task_id }, &mut boards);
        assert!(boards[0].columns[0].tasks[0].archived);

        run(&RestoreTask { task_id }, &mut boards);
        assert!(!boards[0].columns[0].tasks[0].archived);
    }

    #[test]
    fn test_subtask_and_comment_commands() {
        let mut boards = vec![seeded_board()];
        let task_id = boards[0].columns[0].tasks[0].id;

        run(
            &AddSubtask {
                task_id,
                title: "step one".to_string(),
            },
            &mut boards,
        );
        let subtask_id = boards[0].columns[0].tasks[0].subtasks[0].id;

        run(
            &ToggleSubtask {
                task_id,
                subtask_id,
            },
            &mut boards,
        );
        assert!(boards[0].columns[0].tasks[0].subtasks[0].completed);

        run(
            &AddComment {
                task_id,
                author: "ana".to_string(),
                body: "done?".to_string(),
            },
            &mut boards,
        );
        assert_eq!(boards[0].columns[0].tasks[0].comments.len(), 1);
    }

    #[test]
    fn test_delete_task() {
        let mut boards = vec![seeded_board()];
        let task_id = boards[0].columns[0].tasks[0].id;
        run(&DeleteTask { task_id }, &mut boards);
        assert!(boards[0].columns[0].tasks.is_empty());
    }
}
