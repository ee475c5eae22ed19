//! Backend Parity Tests
//!
//! The host treats the two backends as interchangeable, so an identical
//! operation sequence must produce identical logical collections in both.

use std::fs;

use tempfile::TempDir;

use life_dash::{Priority, SessionStore, StorageProvider, VaultConfig, VaultStore};

fn vault_store(temp: &TempDir) -> VaultStore {
    let config = VaultConfig::new(temp.path());
    fs::create_dir_all(temp.path().join("projects")).unwrap();
    fs::write(config.wip_path(), "## In Progress\n\n").unwrap();
    VaultStore::new(config)
}

async fn drive(store: &dyn StorageProvider) {
    for title in ["alpha", "beta", "gamma"] {
        store.add_wip(title).await.unwrap();
    }
    store.update_wip_tag(1, "ops").await.unwrap();
    store.update_wip_progress(1, 60).await.unwrap();
    store.complete_wip(0).await.unwrap();
    store.delete_wip(1).await.unwrap();

    for text in ["buy milk", "water plants", "file taxes"] {
        store.add_checklist(text).await.unwrap();
    }
    store
        .update_checklist_priority(2, Some(Priority::P1))
        .await
        .unwrap();
    store.toggle_checklist(0).await.unwrap();
    store.delete_checklist(0).await.unwrap();
}

#[tokio::test]
async fn test_backends_agree_after_identical_mutations() {
    let temp = TempDir::new().unwrap();
    let vault = vault_store(&temp);
    let session = SessionStore::new();

    drive(&vault).await;
    drive(&session).await;

    let vault_wip = vault.wip_items().await.unwrap();
    let session_wip = session.wip_items().await.unwrap();
    assert_eq!(vault_wip, session_wip);
    assert_eq!(vault_wip.len(), 1);
    assert_eq!(vault_wip[0].title, "beta");
    assert_eq!(vault_wip[0].ordinal, 1);
    assert_eq!(vault_wip[0].category.as_deref(), Some("ops"));
    assert_eq!(vault_wip[0].progress, 60);

    let vault_done = vault.completed_wip_items().await.unwrap();
    let session_done = session.completed_wip_items().await.unwrap();
    assert_eq!(vault_done, session_done);
    assert_eq!(vault_done[0].title, "alpha");

    let vault_active = vault.checklist_items().await.unwrap();
    let session_active = session.checklist_items().await.unwrap();
    assert_eq!(vault_active, session_active);
    assert_eq!(vault_active.len(), 1);
    assert_eq!(vault_active[0].text, "file taxes");
    assert_eq!(vault_active[0].priority, Some(Priority::P1));

    let vault_checked = vault.completed_checklist_items().await.unwrap();
    let session_checked = session.completed_checklist_items().await.unwrap();
    assert_eq!(vault_checked, session_checked);
    assert_eq!(vault_checked.len(), 1);
    assert_eq!(vault_checked[0].text, "buy milk");
}

#[tokio::test]
async fn test_backends_agree_on_today_mode() {
    let temp = TempDir::new().unwrap();
    let vault = vault_store(&temp);
    let session = SessionStore::new();
    assert_eq!(vault.today_mode(), session.today_mode());
}
