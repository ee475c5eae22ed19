//! Assistant Protocol Integration Tests
//!
//! Drive the full chat pipeline - snapshot, delegate, directive extraction,
//! application - against fake shell delegates, including the failure paths.

use std::sync::Arc;
use std::time::{Duration, Instant};

use life_dash::{AssistantService, DelegateConfig, SessionStore, StorageProvider};

fn shell_assistant(store: Arc<dyn StorageProvider>, script: &str) -> AssistantService {
    let config =
        DelegateConfig::new("sh").with_args(vec!["-c".to_string(), script.to_string()]);
    AssistantService::new(store, config)
}

#[tokio::test]
async fn test_chat_applies_a_checklist_directive_once() {
    let store = Arc::new(SessionStore::new());
    let assistant = shell_assistant(
        store.clone(),
        r#"echo 'Added it! ACTION_JSON: {"type":"add_checklist","text":"milk"}'"#,
    );

    let response = assistant.chat("add milk to my list").await;
    assert!(response.success);
    assert_eq!(response.content, "Added it!");
    assert!(response.action.is_some());

    let items = store.checklist_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "milk");
}

#[tokio::test]
async fn test_chat_applies_a_wip_directive() {
    let store = Arc::new(SessionStore::new());
    let assistant = shell_assistant(
        store.clone(),
        r#"echo 'On it. ACTION_JSON: {"type":"add_wip","title":"Blog post"}'"#,
    );

    let response = assistant.chat("start the blog post").await;
    assert!(response.success);
    assert_eq!(response.content, "On it.");

    let items = store.wip_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Blog post");
    assert_eq!(items[0].progress, 0);
}

#[tokio::test]
async fn test_unrecognized_directive_type_is_inert() {
    let store = Arc::new(SessionStore::new());
    let assistant = shell_assistant(
        store.clone(),
        r#"echo 'Added it! ACTION_JSON: {"type":"unknown_type","text":"milk"}'"#,
    );

    let response = assistant.chat("do something odd").await;
    assert!(response.success);
    assert_eq!(response.content, "Added it!");
    assert!(response.action.is_none());
    assert!(store.checklist_items().await.unwrap().is_empty());
    assert!(store.wip_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_directive_still_reports_success() {
    let store = Arc::new(SessionStore::new());
    let assistant = shell_assistant(
        store.clone(),
        r#"echo 'Added it! ACTION_JSON: {"type": }'"#,
    );

    let response = assistant.chat("add milk").await;
    assert!(response.success);
    assert_eq!(response.content, "Added it!");
    assert!(response.action.is_none());
    assert!(store.checklist_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_plain_reply_needs_no_directive() {
    let store = Arc::new(SessionStore::new());
    let assistant = shell_assistant(store.clone(), "echo 'You have nothing urgent today.'");

    let response = assistant.chat("how am I doing?").await;
    assert!(response.success);
    assert_eq!(response.content, "You have nothing urgent today.");
    assert!(response.action.is_none());
}

#[tokio::test]
async fn test_delegate_failure_surfaces_as_structured_error() {
    let store = Arc::new(SessionStore::new());
    let assistant = shell_assistant(store.clone(), "echo broken >&2; exit 2");

    let response = assistant.chat("hello").await;
    assert!(!response.success);
    assert!(response.content.is_empty());
    let error = response.error.unwrap();
    assert!(error.contains("broken"), "error was: {}", error);
}

#[tokio::test]
async fn test_hung_delegate_times_out_within_the_bound() {
    let store = Arc::new(SessionStore::new());
    let timeout = Duration::from_millis(200);
    let config = DelegateConfig::new("sh")
        .with_args(vec!["-c".to_string(), "sleep 5".to_string()])
        .with_timeout(timeout);
    let assistant = AssistantService::new(store, config);

    let start = Instant::now();
    let response = assistant.chat("hello").await;
    let elapsed = start.elapsed();

    assert!(!response.success);
    assert!(response.error.unwrap().contains("timed out"));
    assert!(elapsed >= timeout);
    assert!(
        elapsed < Duration::from_secs(2),
        "timeout was not enforced near the bound: {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_delegate_receives_snapshot_and_message() {
    let store = Arc::new(SessionStore::new());
    store.add_wip("Landing page").await.unwrap();
    store.add_checklist("buy milk").await.unwrap();

    // Echo the prompt back; it arrives as $0 of the shell script.
    let assistant = shell_assistant(store.clone(), r#"echo "$0""#);
    let response = assistant.chat("what should I focus on?").await;

    assert!(response.success);
    assert!(response.content.contains("## Current Snapshot"));
    assert!(response.content.contains("Landing page"));
    assert!(response.content.contains("buy milk"));
    assert!(response
        .content
        .contains(r#"User message: "what should I focus on?""#));
}

#[tokio::test]
async fn test_analysis_and_priority_replies_are_returned_verbatim() {
    let store = Arc::new(SessionStore::new());
    store.add_checklist("buy milk").await.unwrap();

    let assistant = shell_assistant(store.clone(), "echo 'Overall progress: 40%'");
    let response = assistant.analyze_progress().await;
    assert!(response.success);
    assert_eq!(response.content, "Overall progress: 40%");
    assert!(response.action.is_none());

    let assistant = shell_assistant(store, "echo '[1] P2 - routine errand'");
    let response = assistant.suggest_priority().await;
    assert!(response.success);
    assert_eq!(response.content, "[1] P2 - routine errand");
}
