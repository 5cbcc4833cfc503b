pub mod workspace;

pub use workspace::Workspace;

pub use taskdeck_core::{AppConfig, TaskdeckError, TaskdeckResult};
pub use taskdeck_domain::{
    Board, BoardFilterAction, Column, DashboardFilterAction, DragEvent, DragItem, FilterContext,
    Task, WorkspaceSnapshot,
};
pub use taskdeck_persistence::{FileStore, MemoryStore, StateStore};
