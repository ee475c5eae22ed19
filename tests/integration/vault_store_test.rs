//! Vault Store Integration Tests
//!
//! Exercise the document-backed store end-to-end against a temporary vault:
//! full read-modify-rewrite cycles, ordering invariants, verbatim
//! preservation of content the codec does not understand, and weekly
//! document provisioning.

use std::fs;

use tempfile::TempDir;

use life_dash::{CoreError, StorageProvider, VaultConfig, VaultStore};

const WIP_DOC: &str = "# Current WIP\n\n## In Progress\n\n1. [product] Landing page - 80%\n2. Write docs - 30%\n3. [ops] Backups - 10%\n\nKeep shipping.\n";

fn vault_fixture() -> (TempDir, VaultStore) {
    let temp = TempDir::new().unwrap();
    let config = VaultConfig::new(temp.path());
    fs::create_dir_all(temp.path().join("projects")).unwrap();
    fs::write(config.wip_path(), WIP_DOC).unwrap();
    (temp, VaultStore::new(config))
}

fn read_wip_doc(temp: &TempDir) -> String {
    fs::read_to_string(temp.path().join("projects").join("current-wip.md")).unwrap()
}

#[tokio::test]
async fn test_read_does_not_rewrite_the_document() {
    let (temp, store) = vault_fixture();
    let items = store.wip_items().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(read_wip_doc(&temp), WIP_DOC);
}

#[tokio::test]
async fn test_full_wip_lifecycle_against_the_document() {
    let (temp, store) = vault_fixture();

    store.add_wip("Ship newsletter").await.unwrap();
    store.update_wip_tag(3, "marketing").await.unwrap();
    store.update_wip_progress(3, 25).await.unwrap();
    store.complete_wip(0).await.unwrap();
    store.delete_wip(1).await.unwrap();

    let items = store.wip_items().await.unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Write docs", "Ship newsletter"]);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.ordinal, i + 1);
    }
    assert_eq!(items[1].category.as_deref(), Some("marketing"));
    assert_eq!(items[1].progress, 25);

    let completed = store.completed_wip_items().await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Landing page");

    let text = read_wip_doc(&temp);
    assert!(text.contains("# Completed Tasks"));
    // Prose between rows survived every rewrite.
    assert!(text.contains("Keep shipping."));
    // The completed row kept its pre-completion ordinal text.
    assert!(text.contains("1. [product] Landing page - 80%"));
}

#[tokio::test]
async fn test_progress_is_written_verbatim_without_clamping() {
    let (temp, store) = vault_fixture();
    store.update_wip_progress(2, 150).await.unwrap();
    assert_eq!(store.wip_items().await.unwrap()[2].progress, 150);
    assert!(read_wip_doc(&temp).contains("3. [ops] Backups - 150%"));
}

#[tokio::test]
async fn test_index_errors_are_discrete_and_typed() {
    let (_temp, store) = vault_fixture();
    let err = store.complete_wip(3).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    let missing = VaultStore::new(VaultConfig::new("/nonexistent/vault"));
    let err = missing.wip_items().await.unwrap_err();
    assert!(matches!(err, CoreError::DocumentMissing(_)));
}

#[tokio::test]
async fn test_weekly_document_lifecycle() {
    let temp = TempDir::new().unwrap();
    let store = VaultStore::new(VaultConfig::new(temp.path()));

    // First touch provisions this week's document from the template.
    store.add_checklist("buy milk").await.unwrap();
    let weekly_dir = temp.path().join("journal").join("weekly");
    let entries: Vec<_> = fs::read_dir(&weekly_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let weekly_path = entries[0].as_ref().unwrap().path();
    let name = weekly_path.file_name().unwrap().to_string_lossy().to_string();
    // Keyed as "<year>-W<week>.md".
    assert!(name.contains("-W"), "unexpected weekly key: {}", name);

    let text = fs::read_to_string(&weekly_path).unwrap();
    assert!(text.starts_with("# "));
    assert!(text.contains("## Weekly Checklist"));
    assert!(text.contains("- [ ] buy milk"));

    store.toggle_checklist(0).await.unwrap();
    let text = fs::read_to_string(&weekly_path).unwrap();
    assert!(text.contains("# Completed Checklist"));
    assert!(text.contains("- [x] buy milk"));
    assert!(store.checklist_items().await.unwrap().is_empty());
    assert_eq!(store.completed_checklist_items().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_hand_edited_content_survives_checklist_mutations() {
    let temp = TempDir::new().unwrap();
    let store = VaultStore::new(VaultConfig::new(temp.path()));
    store.add_checklist("first").await.unwrap();

    // Hand-edit the provisioned document: notes and a pre-checked row above
    // the completed marker.
    let weekly_dir = temp.path().join("journal").join("weekly");
    let weekly_path = fs::read_dir(&weekly_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let mut text = fs::read_to_string(&weekly_path).unwrap();
    text.push_str("- [x] checked by hand\nremember to rest\n");
    fs::write(&weekly_path, &text).unwrap();

    store.add_checklist("second").await.unwrap();
    store.toggle_checklist(0).await.unwrap();

    let text = fs::read_to_string(&weekly_path).unwrap();
    assert!(text.contains("- [x] checked by hand"));
    assert!(text.contains("remember to rest"));

    // The hand-checked row above the marker is invisible to both subsets.
    let active = store.checklist_items().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].text, "second");
    let completed = store.completed_checklist_items().await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].text, "first");
}
