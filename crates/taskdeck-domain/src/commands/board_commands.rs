use super::{Command, CommandContext};
use crate::board::Board;
use crate::field_update::FieldUpdate;
use taskdeck_core::TaskdeckResult;
use uuid::Uuid;

/// Create a new board seeded with the stock columns.
pub struct CreateBoard {
    pub title: String,
    pub description: Option<String>,
}

impl Command for CreateBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        let board = Board::with_default_columns(self.title.clone(), self.description.clone());
        context.boards.push(board);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create board: '{}'", self.title)
    }
}

/// Update board title/description.
pub struct UpdateBoard {
    pub board_id: Uuid,
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
}

impl Command for UpdateBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        if let Some(board) = context.find_board_mut(self.board_id) {
            if let Some(ref title) = self.title {
                board.update_title(title.clone());
            }
            if self.description.is_change() {
                let mut description = board.description.clone();
                self.description.clone().apply_to(&mut description);
                board.update_description(description);
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        "Update board".to_string()
    }
}

/// Delete a board and everything it owns.
pub struct DeleteBoard {
    pub board_id: Uuid,
}

impl Command for DeleteBoard {
    fn execute(&self, context: &mut CommandContext) -> TaskdeckResult<()> {
        context.boards.retain(|b| b.id != self.board_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete board {}", self.board_id)
    }
}
