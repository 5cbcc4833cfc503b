use super::{Command, CommandContext};
use crate::column::Column;
use crate::field_update::FieldUpdate;
use crate::task::TaskStatus;
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use uuid::Uuid;

/// Create a column on a board.
///
/// The one place column input is validated: a blank title or a zero task
/// limit never makes it into the model.
pub struct CreateColumn {
    pub board_id: Uuid,
    pub title: String,
    pub status: TaskStatus,
    pub color: String,
    pub task_limit: Option<u32>,
}

impl Command for CreateColumn {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if self.title.trim().is_empty() {
            return Err(TaskdeckError::Validation(
                "column title cannot be empty".to_string(),
            ));
        }
        if self.task_limit == Some(0) {
            return Err(TaskdeckError::Validation(
                "column task limit must be positive".to_string(),
            ));
        }
        if let Some(board) = context.find_board_mut(self.board_id) {
            let mut column = Column::new(
                self.title.clone(),
                self.status.clone(),
                self.color.clone(),
            );
            column.task_limit = self.task_limit;
            board.columns.push(column);
            board.updated_at = chrono::Utc::now();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create column: '{}'", self.title)
    }
}

/// Update column properties.
pub struct UpdateColumn {
    pub column_id: Uuid,
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub color: Option<String>,
    pub task_limit: FieldUpdate<u32>,
}

impl Command for UpdateColumn {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(ref title) = self.title {
            if title.trim().is_empty() {
                return Err(TaskdeckError::Validation(
                    "column title cannot be empty".to_string(),
                ));
            }
        }
        if self.task_limit == FieldUpdate::Set(0) {
            return Err(TaskdeckError::Validation(
                "column task limit must be positive".to_string(),
            ));
        }
        if let Some(column) = context.find_column_mut(self.column_id) {
            if let Some(ref title) = self.title {
                column.update_title(title.clone());
            }
            if let Some(ref status) = self.status {
                column.status = status.clone();
                column.updated_at = chrono::Utc::now();
            }
            if let Some(ref color) = self.color {
                column.update_color(color.clone());
            }
            if self.task_limit.is_change() {
                let mut limit = column.task_limit;
                self.task_limit.clone().apply_to(&mut limit);
                column.set_task_limit(limit);
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        "Update column".to_string()
    }
}

/// Delete a column and the tasks it holds.
pub struct DeleteColumn {
    pub column_id: Uuid,
}

impl Command for DeleteColumn {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        for board in context.boards.iter_mut() {
            let before = board.columns.len();
            board.columns.retain(|c| c.id != self.column_id);
            if board.columns.len() != before {
                board.updated_at = chrono::Utc::now();
                break;
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete column {}", self.column_id)
    }
}

/// Replace a board's column order with the given id list.
pub struct SetColumnOrder {
    pub board_id: Uuid,
    pub ordered: Vec<Uuid>,
}

impl Command for SetColumnOrder {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(board) = context.find_board_mut(self.board_id) {
            board.set_column_order(&self.ordered);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Reorder columns on board {}", self.board_id)
    }
}
