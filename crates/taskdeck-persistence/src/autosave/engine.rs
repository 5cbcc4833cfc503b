use std::time::Duration;
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use taskdeck_domain::WorkspaceSnapshot;
use tokio::sync::mpsc;

use crate::autosave::debounce::DebounceTimer;
use crate::state_store::StateStore;

/// Where the engine is in its save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    /// A change is waiting for the quiet period to elapse.
    Pending,
    Saving,
    Saved,
    Error,
}

/// Debounced auto-save.
///
/// Every data change re-arms the timer; when it fires, the engine persists
/// the pending snapshot unless it serializes identically to the last
/// successful save. One save runs at a time: a change arriving mid-save
/// stays pending and is picked up by the next debounce cycle.
///
/// A failed debounced save is logged and the engine drops back to waiting —
/// the snapshot stays pending, so `has_unsaved_changes` keeps reporting
/// true and the next change-triggered cycle retries naturally. Only
/// `force_save` surfaces the error to the caller.
pub struct AutoSaveEngine {
    store: StateStore,
    timer: DebounceTimer,
    pending: Option<WorkspaceSnapshot>,
    last_saved: Option<Vec<u8>>,
    saving: bool,
    state: SaveState,
}

impl AutoSaveEngine {
    pub fn new(store: StateStore, delay: Duration) -> Self {
        Self {
            store,
            timer: DebounceTimer::new(delay),
            pending: None,
            last_saved: None,
            saving: false,
            state: SaveState::Idle,
        }
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    /// True while a captured change has not reached storage.
    pub fn has_unsaved_changes(&self) -> bool {
        self.pending.is_some()
    }

    /// Capture a changed snapshot and (re)arm the debounce timer.
    pub fn notify_change(&mut self, snapshot: WorkspaceSnapshot) {
        self.pending = Some(snapshot);
        self.timer.reset();
        self.state = SaveState::Pending;
        tracing::debug!(
            "Change captured; save due in {:?}",
            self.timer.delay()
        );
    }

    /// The comparison form used for change detection. Compact encoding is
    /// enough: equality, not readability, is what matters here.
    fn encode(snapshot: &WorkspaceSnapshot) -> TaskdeckResult<Vec<u8>> {
        serde_json::to_vec(snapshot).map_err(|e| TaskdeckError::Serialization(e.to_string()))
    }

    /// Flush the pending snapshot. Called when the debounce timer fires.
    pub async fn flush_due(&mut self) {
        self.timer.cancel();

        if self.saving {
            // The pending snapshot stays captured; the next cycle gets it.
            tracing::debug!("Save already in flight; deferring flush");
            return;
        }

        let Some(snapshot) = self.pending.take() else {
            self.state = SaveState::Idle;
            return;
        };

        let encoded = match Self::encode(&snapshot) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode snapshot for saving: {e}");
                self.pending = Some(snapshot);
                self.state = SaveState::Error;
                return;
            }
        };

        if self.last_saved.as_deref() == Some(encoded.as_slice()) {
            tracing::debug!("Snapshot unchanged since last save; skipping");
            self.state = SaveState::Idle;
            return;
        }

        self.saving = true;
        self.state = SaveState::Saving;
        let result = self.store.save(&snapshot).await;
        self.saving = false;

        match result {
            Ok(saved_at) => {
                self.last_saved = Some(encoded);
                self.state = SaveState::Saved;
                tracing::debug!("Auto-saved workspace at {saved_at}");
            }
            Err(e) => {
                tracing::error!("Auto-save failed: {e}");
                // Keep the snapshot: has_unsaved_changes stays true and the
                // next debounce cycle is the retry.
                self.pending = Some(snapshot);
                self.state = SaveState::Error;
            }
        }
    }

    /// Save immediately, skipping the debounce delay and the unchanged-data
    /// check. The in-flight guard still applies: returns `Ok(false)` without
    /// saving while another save is running. Persistence errors propagate.
    pub async fn force_save(&mut self, snapshot: &WorkspaceSnapshot) -> TaskdeckResult<bool> {
        if self.saving {
            return Ok(false);
        }
        self.timer.cancel();

        let encoded = Self::encode(snapshot)?;

        self.saving = true;
        self.state = SaveState::Saving;
        let result = self.store.save(snapshot).await;
        self.saving = false;

        match result {
            Ok(_) => {
                self.last_saved = Some(encoded);
                self.pending = None;
                self.state = SaveState::Saved;
                Ok(true)
            }
            Err(e) => {
                self.state = SaveState::Error;
                Err(e)
            }
        }
    }

    /// Worker loop: receive changed snapshots and flush when the quiet
    /// period elapses. Exits when the channel closes, flushing any pending
    /// snapshot first so shutdown never drops a change.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<WorkspaceSnapshot>) {
        loop {
            let deadline = self.timer.deadline();
            tokio::select! {
                received = rx.recv() => match received {
                    Some(snapshot) => self.notify_change(snapshot),
                    None => break,
                },
                _ = DebounceTimer::sleep_until(deadline) => {
                    self.flush_due().await;
                }
            }
        }

        if self.has_unsaved_changes() {
            self.flush_due().await;
        }
        tracing::debug!("Auto-save worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::traits::KeyValueStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use taskdeck_domain::Board;

    /// Counts writes so tests can assert how many saves actually ran.
    struct CountingStore {
        inner: MemoryStore,
        sets: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl KeyValueStore for CountingStore {
        async fn get(&self, key: &str) -> TaskdeckResult<Option<Vec<u8>>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &[u8]) -> TaskdeckResult<()> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> TaskdeckResult<()> {
            self.inner.remove(key).await
        }

        async fn clear(&self) -> TaskdeckResult<()> {
            self.inner.clear().await
        }
    }

    /// Every write fails with a quota-style error.
    struct FailingStore;

    #[async_trait::async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> TaskdeckResult<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &[u8]) -> TaskdeckResult<()> {
            Err(TaskdeckError::Internal("storage quota exceeded".to_string()))
        }

        async fn remove(&self, _key: &str) -> TaskdeckResult<()> {
            Ok(())
        }

        async fn clear(&self) -> TaskdeckResult<()> {
            Ok(())
        }
    }

    fn counting_engine(delay_ms: u64) -> (AutoSaveEngine, Arc<AtomicUsize>) {
        let sets = Arc::new(AtomicUsize::new(0));
        let store = CountingStore {
            inner: MemoryStore::new(),
            sets: sets.clone(),
        };
        let state_store = StateStore::new(Arc::new(store), "taskdeck.workspace");
        (
            AutoSaveEngine::new(state_store, Duration::from_millis(delay_ms)),
            sets,
        )
    }

    fn sample_snapshot() -> WorkspaceSnapshot {
        let board = Board::with_default_columns("Test".to_string(), None);
        WorkspaceSnapshot::from_data(vec![board], None)
    }

    #[tokio::test]
    async fn test_unchanged_snapshot_saves_at_most_once() {
        let (mut engine, sets) = counting_engine(10);
        let snapshot = sample_snapshot();

        engine.notify_change(snapshot.clone());
        engine.flush_due().await;
        assert_eq!(sets.load(Ordering::SeqCst), 1);
        assert_eq!(engine.state(), SaveState::Saved);

        // Second cycle with the identical snapshot: no second write.
        engine.notify_change(snapshot);
        engine.flush_due().await;
        assert_eq!(sets.load(Ordering::SeqCst), 1);
        assert_eq!(engine.state(), SaveState::Idle);
        assert!(!engine.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_changed_snapshot_saves_again() {
        let (mut engine, sets) = counting_engine(10);
        let mut snapshot = sample_snapshot();

        engine.notify_change(snapshot.clone());
        engine.flush_due().await;

        snapshot.boards[0].update_title("Renamed".to_string());
        engine.notify_change(snapshot);
        engine.flush_due().await;

        assert_eq!(sets.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_notify_change_arms_timer() {
        let (mut engine, _) = counting_engine(10);
        assert_eq!(engine.state(), SaveState::Idle);

        engine.notify_change(sample_snapshot());
        assert_eq!(engine.state(), SaveState::Pending);
        assert!(engine.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_unsaved_changes() {
        let state_store = StateStore::new(Arc::new(FailingStore), "taskdeck.workspace");
        let mut engine = AutoSaveEngine::new(state_store, Duration::from_millis(10));

        engine.notify_change(sample_snapshot());
        engine.flush_due().await;

        assert_eq!(engine.state(), SaveState::Error);
        assert!(engine.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_force_save_propagates_error() {
        let state_store = StateStore::new(Arc::new(FailingStore), "taskdeck.workspace");
        let mut engine = AutoSaveEngine::new(state_store, Duration::from_millis(10));

        let result = engine.force_save(&sample_snapshot()).await;
        assert!(result.is_err());
        assert_eq!(engine.state(), SaveState::Error);
    }

    #[tokio::test]
    async fn test_force_save_clears_pending_and_timer() {
        let (mut engine, sets) = counting_engine(60_000);

        engine.notify_change(sample_snapshot());
        let saved = engine.force_save(&sample_snapshot()).await.unwrap();

        assert!(saved);
        assert_eq!(sets.load(Ordering::SeqCst), 1);
        assert!(!engine.has_unsaved_changes());
        assert_eq!(engine.state(), SaveState::Saved);
    }

    #[tokio::test]
    async fn test_run_debounces_rapid_changes_into_one_save() {
        let (engine, sets) = counting_engine(50);
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(engine.run(rx));

        let mut snapshot = sample_snapshot();
        for i in 0..5 {
            snapshot.boards[0].update_title(format!("rev {i}"));
            tx.send(snapshot.clone()).unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        // One quiet period after the burst: exactly one save.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(sets.load(Ordering::SeqCst), 1);

        drop(tx);
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_run_flushes_pending_on_shutdown() {
        let (engine, sets) = counting_engine(60_000);
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(engine.run(rx));

        tx.send(sample_snapshot()).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(tx);
        worker.await.unwrap();

        // The long timer never fired, but shutdown flushed the change.
        assert_eq!(sets.load(Ordering::SeqCst), 1);
    }
}
