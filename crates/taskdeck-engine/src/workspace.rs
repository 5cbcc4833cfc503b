//! The workspace state container.
//!
//! `Workspace` owns the board collection, the current-board selection, and
//! both filter contexts. Every mutation flows through `execute`, which runs
//! a domain command, marks the workspace dirty, and hands a snapshot to the
//! auto-save worker when persistence is configured. Derived views borrow
//! from the owned state and never copy it.
//!
//! There is no global instance: hosts construct a `Workspace` and pass it
//! where it is needed.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use taskdeck_core::{AppConfig, TaskdeckResult};
use taskdeck_domain::commands::{Command, CommandContext};
use taskdeck_domain::dragdrop::{resolve_drag, DragEvent};
use taskdeck_domain::query;
use taskdeck_domain::{
    Board, BoardFilterAction, BoardId, DashboardFilterAction, DashboardMetrics, FilterContext,
    FilterState, Task, WorkspaceSnapshot,
};
use taskdeck_persistence::{AutoSaveEngine, FileStore, StateStore};

pub struct Workspace {
    boards: Vec<Board>,
    current_board_id: Option<BoardId>,
    filters: FilterState,
    dirty: bool,
    state_store: Option<StateStore>,
    save_tx: Option<mpsc::UnboundedSender<WorkspaceSnapshot>>,
}

impl Workspace {
    /// An in-memory workspace with no persistence wired up.
    pub fn new() -> Self {
        Self {
            boards: Vec::new(),
            current_board_id: None,
            filters: FilterState::new(),
            dirty: false,
            state_store: None,
            save_tx: None,
        }
    }

    /// A workspace whose changes are auto-saved through `store`.
    ///
    /// Spawns the debounced save worker and returns its handle; the worker
    /// exits (flushing pending work) once the workspace is dropped or
    /// `close_save_channel` is called.
    pub fn with_autosave(
        store: StateStore,
        delay: Duration,
    ) -> (Self, tokio::task::JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = AutoSaveEngine::new(store.clone(), delay);
        let worker = tokio::spawn(engine.run(rx));

        let mut workspace = Self::new();
        workspace.state_store = Some(store);
        workspace.save_tx = Some(tx);
        (workspace, worker)
    }

    /// Build a file-backed workspace from application configuration:
    /// restore the persisted state and wire up auto-save with the
    /// configured delay.
    pub async fn from_config(
        config: &AppConfig,
    ) -> TaskdeckResult<(Self, tokio::task::JoinHandle<()>)> {
        let store = StateStore::new(
            Arc::new(FileStore::new(config.effective_data_dir())),
            config.storage_key.clone(),
        );
        Self::load_or_default(store, config.autosave_delay()).await
    }

    /// Restore the persisted workspace (if any) and wire up auto-save.
    pub async fn load_or_default(
        store: StateStore,
        delay: Duration,
    ) -> TaskdeckResult<(Self, tokio::task::JoinHandle<()>)> {
        let snapshot = store.load().await?.unwrap_or_default();
        let (mut workspace, worker) = Self::with_autosave(store, delay);
        workspace.restore(snapshot);
        workspace.dirty = false;
        Ok((workspace, worker))
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn current_board(&self) -> Option<&Board> {
        let id = self.current_board_id?;
        self.boards.iter().find(|b| b.id == id)
    }

    /// Select a board. Selecting an id the workspace does not hold clears
    /// the selection rather than erroring, so stale ids degrade gracefully.
    pub fn set_current_board(&mut self, board_id: Option<BoardId>) {
        self.current_board_id = board_id.filter(|id| self.boards.iter().any(|b| b.id == *id));
    }

    /// Execute a command, mark the workspace dirty, and queue a snapshot for
    /// the auto-save worker.
    pub fn execute(&mut self, command: Box<dyn Command>) -> TaskdeckResult<()> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let mut context = CommandContext {
            boards: &mut self.boards,
        };
        command.execute(&mut context)?;

        // A deleted board cannot stay selected.
        if let Some(id) = self.current_board_id {
            if !self.boards.iter().any(|b| b.id == id) {
                self.current_board_id = None;
            }
        }

        self.dirty = true;
        self.queue_snapshot();
        Ok(())
    }

    /// Resolve a drag-end event against the current board and execute the
    /// resulting mutation. Returns whether anything changed.
    pub fn apply_drag(&mut self, event: &DragEvent) -> TaskdeckResult<bool> {
        let Some(board) = self.current_board() else {
            return Ok(false);
        };
        let Some(drag_command) = resolve_drag(board, event) else {
            return Ok(false);
        };
        self.execute(drag_command.into_command())?;
        Ok(true)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn apply_board_filter(&mut self, action: BoardFilterAction) {
        self.filters.apply_board(action);
    }

    pub fn apply_dashboard_filter(&mut self, action: DashboardFilterAction) {
        self.filters.apply_dashboard(action);
    }

    pub fn clear_filters(&mut self, context: FilterContext) {
        self.filters.clear(context);
    }

    pub fn has_active_filters(&self, context: FilterContext) -> bool {
        self.filters.has_active_filters(context)
    }

    /// Tasks visible in the board view under the current filters.
    pub fn board_view(&self) -> Vec<&Task> {
        query::board_view(&self.boards, &self.filters.board)
    }

    /// Tasks feeding the dashboard under the current filters.
    pub fn dashboard_view(&self, now: DateTime<Utc>) -> Vec<&Task> {
        query::dashboard_view(&self.boards, &self.filters.dashboard, now)
    }

    /// Aggregated dashboard figures for the current dashboard view.
    pub fn metrics(&self, now: DateTime<Utc>) -> DashboardMetrics {
        let view = self.dashboard_view(now);
        DashboardMetrics::compute(&view, now)
    }

    /// Capture current state.
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot::from_data(self.boards.clone(), self.current_board().cloned())
    }

    /// Overwrite state from a snapshot.
    pub fn restore(&mut self, snapshot: WorkspaceSnapshot) {
        self.current_board_id = snapshot
            .current_board
            .as_ref()
            .map(|b| b.id)
            .filter(|id| snapshot.boards.iter().any(|b| b.id == *id));
        self.boards = snapshot.boards;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark state as clean, e.g. after an external reload.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Save immediately through the state store, bypassing the debounce
    /// worker. Persistence errors propagate to the caller.
    pub async fn force_save(&mut self) -> TaskdeckResult<()> {
        if let Some(ref store) = self.state_store {
            let snapshot = self.snapshot();
            store.save(&snapshot).await?;
            self.dirty = false;
            tracing::info!("Force-saved workspace");
        }
        Ok(())
    }

    /// Close the save channel so the worker flushes and exits.
    /// Called during graceful shutdown before awaiting the worker handle.
    pub fn close_save_channel(&mut self) {
        self.save_tx = None;
    }

    pub fn has_save_channel(&self) -> bool {
        self.save_tx.is_some()
    }

    fn queue_snapshot(&self) {
        if let Some(ref tx) = self.save_tx {
            // Send is non-blocking and only fails if the worker is gone.
            if tx.send(self.snapshot()).is_err() {
                tracing::error!("Failed to queue save: worker channel closed");
            }
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
