//! End-to-end switch/swap/rename/delete flows over the route table.

use crate::integration::run_context;
use cctx::cli::Command;
use cctx::error::CtxError;
use cctx::store::{ContextStore, MemoryStore};
use std::sync::Arc;

#[test]
fn test_switch_then_swap_toggles() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging", "prod"]));
    store.set_current("dev").unwrap();
    let (context, _dir) = run_context(&store);

    let execution = context
        .execute(&Command::Switch("staging".to_string()))
        .unwrap();
    assert_eq!(
        execution.output.as_deref(),
        Some("Switched to context \"staging\".")
    );
    assert_eq!(store.current().unwrap(), "staging");

    context.execute(&Command::Swap).unwrap();
    assert_eq!(store.current().unwrap(), "dev");

    context.execute(&Command::Swap).unwrap();
    assert_eq!(store.current().unwrap(), "staging");
}

#[test]
fn test_switch_carries_hand_off_directory() {
    let store = Arc::new(MemoryStore::new());
    store.add("dev", Some("/srv/dev"), None);
    let (context, _dir) = run_context(&store);

    let execution = context.execute(&Command::Switch("dev".to_string())).unwrap();
    let hand_off = execution.hand_off.unwrap();
    assert_eq!(hand_off.context, "dev");
    assert_eq!(hand_off.directory.as_deref(), Some("/srv/dev"));
}

#[test]
fn test_reswitch_keeps_previous() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging"]));
    store.set_current("dev").unwrap();
    let (context, _dir) = run_context(&store);

    context
        .execute(&Command::Switch("staging".to_string()))
        .unwrap();
    context
        .execute(&Command::Switch("staging".to_string()))
        .unwrap();

    context.execute(&Command::Swap).unwrap();
    assert_eq!(store.current().unwrap(), "dev");
}

#[test]
fn test_swap_without_history_fails() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev"]));
    let (context, _dir) = run_context(&store);

    assert!(matches!(
        context.execute(&Command::Swap),
        Err(CtxError::NoPreviousContext)
    ));
}

#[test]
fn test_rename_preserves_activity() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "prod"]));
    store.set_current("prod").unwrap();
    let (context, _dir) = run_context(&store);

    context
        .execute(&Command::Rename {
            old: "prod".to_string(),
            new: "production".to_string(),
        })
        .unwrap();
    assert_eq!(store.current().unwrap(), "production");
    assert_eq!(store.list().unwrap(), vec!["dev", "production"]);
}

#[test]
fn test_rename_collision_overwrites() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging"]));
    let (context, _dir) = run_context(&store);

    let execution = context
        .execute(&Command::Rename {
            old: "dev".to_string(),
            new: "staging".to_string(),
        })
        .unwrap();
    assert_eq!(
        execution.output.as_deref(),
        Some("Renamed context \"dev\" to \"staging\".")
    );
    assert_eq!(store.list().unwrap(), vec!["staging"]);
}

#[test]
fn test_delete_keeps_shared_credentials() {
    let store = Arc::new(MemoryStore::new());
    store.add("dev", None, Some("shared-admin"));
    store.add("prod", None, Some("shared-admin"));
    let (context, _dir) = run_context(&store);

    context
        .execute(&Command::Delete(vec!["dev".to_string()]))
        .unwrap();
    assert_eq!(store.users(), vec!["shared-admin"]);
    assert_eq!(store.user_of("prod").unwrap(), "shared-admin");
}

#[test]
fn test_delete_batch_fail_fast() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging", "prod"]));
    let (context, _dir) = run_context(&store);

    let result = context.execute(&Command::Delete(vec![
        "dev".to_string(),
        "missing".to_string(),
        "prod".to_string(),
    ]));
    assert!(matches!(result, Err(CtxError::NotFound(_))));
    assert_eq!(store.list().unwrap(), vec!["staging", "prod"]);
}

#[test]
fn test_unset_keeps_swap_working() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging"]));
    store.set_current("dev").unwrap();
    let (context, _dir) = run_context(&store);

    context
        .execute(&Command::Switch("staging".to_string()))
        .unwrap();
    context.execute(&Command::Unset).unwrap();
    assert!(matches!(
        context.execute(&Command::Current),
        Err(CtxError::NoCurrentContext)
    ));

    context.execute(&Command::Swap).unwrap();
    assert_eq!(store.current().unwrap(), "dev");
}

#[test]
fn test_full_scenario() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging", "prod"]));
    store.set_current("dev").unwrap();
    let (context, _dir) = run_context(&store);

    context
        .execute(&Command::Switch("staging".to_string()))
        .unwrap();
    assert_eq!(store.current().unwrap(), "staging");

    context.execute(&Command::Swap).unwrap();
    assert_eq!(store.current().unwrap(), "dev");

    context
        .execute(&Command::Rename {
            old: "prod".to_string(),
            new: "production".to_string(),
        })
        .unwrap();
    assert_eq!(store.list().unwrap(), vec!["dev", "staging", "production"]);

    context
        .execute(&Command::Delete(vec!["staging".to_string()]))
        .unwrap();
    assert_eq!(store.list().unwrap(), vec!["dev", "production"]);

    // Previous still points at the deleted entry; the swap surfaces the
    // store's not-found error.
    assert!(matches!(
        context.execute(&Command::Swap),
        Err(CtxError::NotFound(_))
    ));
}
