//! Auto-save behavior through the workspace: debounced persistence, forced
//! saves, and shutdown flushing, against a real file-backed store.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

use taskdeck_domain::commands::CreateBoard;
use taskdeck_engine::Workspace;
use taskdeck_persistence::{FileStore, StateStore};

const STORAGE_KEY: &str = "taskdeck.workspace";

fn file_state_store(dir: &std::path::Path) -> StateStore {
    StateStore::new(Arc::new(FileStore::new(dir)), STORAGE_KEY)
}

fn create_board(workspace: &mut Workspace, title: &str) -> Result<()> {
    workspace.execute(Box::new(CreateBoard {
        title: title.to_string(),
        description: None,
    }))?;
    Ok(())
}

#[tokio::test]
async fn debounced_save_lands_after_quiet_period() -> Result<()> {
    let dir = tempdir()?;
    let (mut workspace, worker) =
        Workspace::with_autosave(file_state_store(dir.path()), Duration::from_millis(50));

    create_board(&mut workspace, "Persisted")?;

    // Nothing on disk until the quiet period elapses.
    assert!(file_state_store(dir.path()).load().await?.is_none());

    tokio::time::sleep(Duration::from_millis(300)).await;

    let loaded = file_state_store(dir.path()).load().await?.unwrap();
    assert_eq!(loaded.boards.len(), 1);
    assert_eq!(loaded.boards[0].title, "Persisted");

    workspace.close_save_channel();
    worker.await?;
    Ok(())
}

#[tokio::test]
async fn rapid_changes_collapse_into_final_state() -> Result<()> {
    let dir = tempdir()?;
    let (mut workspace, worker) =
        Workspace::with_autosave(file_state_store(dir.path()), Duration::from_millis(50));

    for i in 0..4 {
        create_board(&mut workspace, &format!("board {i}"))?;
    }

    tokio::time::sleep(Duration::from_millis(300)).await;

    let loaded = file_state_store(dir.path()).load().await?.unwrap();
    assert_eq!(loaded.boards.len(), 4);

    workspace.close_save_channel();
    worker.await?;
    Ok(())
}

#[tokio::test]
async fn shutdown_flushes_pending_change() -> Result<()> {
    let dir = tempdir()?;
    // Timer far in the future: only the shutdown flush can write.
    let (mut workspace, worker) =
        Workspace::with_autosave(file_state_store(dir.path()), Duration::from_secs(3600));

    create_board(&mut workspace, "Last minute")?;

    workspace.close_save_channel();
    worker.await?;

    let loaded = file_state_store(dir.path()).load().await?.unwrap();
    assert_eq!(loaded.boards[0].title, "Last minute");
    Ok(())
}

#[tokio::test]
async fn force_save_bypasses_debounce() -> Result<()> {
    let dir = tempdir()?;
    let (mut workspace, worker) =
        Workspace::with_autosave(file_state_store(dir.path()), Duration::from_secs(3600));

    create_board(&mut workspace, "Urgent")?;
    workspace.force_save().await?;

    assert!(!workspace.is_dirty());
    let loaded = file_state_store(dir.path()).load().await?.unwrap();
    assert_eq!(loaded.boards[0].title, "Urgent");

    workspace.close_save_channel();
    worker.await?;
    Ok(())
}

#[tokio::test]
async fn load_or_default_restores_persisted_workspace() -> Result<()> {
    let dir = tempdir()?;

    {
        let (mut workspace, worker) =
            Workspace::with_autosave(file_state_store(dir.path()), Duration::from_millis(10));
        create_board(&mut workspace, "Survivor")?;
        let board_id = workspace.boards()[0].id;
        workspace.set_current_board(Some(board_id));
        workspace.force_save().await?;
        workspace.close_save_channel();
        worker.await?;
    }

    let (restored, worker) =
        Workspace::load_or_default(file_state_store(dir.path()), Duration::from_millis(50))
            .await?;

    assert_eq!(restored.boards().len(), 1);
    assert_eq!(restored.current_board().unwrap().title, "Survivor");
    assert!(!restored.is_dirty());

    drop(restored);
    worker.await?;
    Ok(())
}

#[tokio::test]
async fn from_config_persists_under_configured_key() -> Result<()> {
    let dir = tempdir()?;
    let config = taskdeck_core::AppConfig {
        autosave_delay_ms: 50,
        storage_key: "custom.key".to_string(),
        data_dir: Some(dir.path().to_path_buf()),
    };

    let (mut workspace, worker) = Workspace::from_config(&config).await?;
    create_board(&mut workspace, "Configured")?;
    workspace.force_save().await?;
    workspace.close_save_channel();
    worker.await?;

    let loaded = StateStore::new(Arc::new(FileStore::new(dir.path())), "custom.key")
        .load()
        .await?
        .unwrap();
    assert_eq!(loaded.boards[0].title, "Configured");
    Ok(())
}

#[tokio::test]
async fn load_or_default_with_empty_store_starts_fresh() -> Result<()> {
    let dir = tempdir()?;
    let (workspace, worker) =
        Workspace::load_or_default(file_state_store(dir.path()), Duration::from_millis(50))
            .await?;

    assert!(workspace.boards().is_empty());
    drop(workspace);
    worker.await?;
    Ok(())
}
