//! Output surface of the route table: listing text and command messages.

use crate::integration::run_context;
use cctx::cli::Command;
use cctx::error::CtxError;
use cctx::store::{ContextStore, MemoryStore};
use std::sync::Arc;

#[test]
fn test_listing_in_store_order() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging", "prod"]));
    let (context, _dir) = run_context(&store);

    let execution = context.execute(&Command::Default).unwrap();
    let output = execution.output.unwrap();
    assert_eq!(output, "dev\nstaging\nprod");
    assert!(execution.hand_off.is_none());
}

#[test]
fn test_listing_stable_across_calls() {
    let store = Arc::new(MemoryStore::with_contexts(&["b", "a", "c"]));
    let (context, _dir) = run_context(&store);

    let first = context.execute(&Command::Default).unwrap().output;
    let second = context.execute(&Command::Default).unwrap().output;
    assert_eq!(first, second);
}

#[test]
fn test_current_prints_name() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev"]));
    store.set_current("dev").unwrap();
    let (context, _dir) = run_context(&store);

    let execution = context.execute(&Command::Current).unwrap();
    assert_eq!(execution.output.as_deref(), Some("dev"));
}

#[test]
fn test_current_without_pointer_fails() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev"]));
    let (context, _dir) = run_context(&store);

    assert!(matches!(
        context.execute(&Command::Current),
        Err(CtxError::NoCurrentContext)
    ));
}

#[test]
fn test_switch_unknown_context_fails() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev"]));
    let (context, _dir) = run_context(&store);

    assert!(matches!(
        context.execute(&Command::Switch("nope".to_string())),
        Err(CtxError::NotFound(_))
    ));
}

#[test]
fn test_delete_reports_each_name() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev", "staging"]));
    let (context, _dir) = run_context(&store);

    let execution = context
        .execute(&Command::Delete(vec![
            "dev".to_string(),
            "staging".to_string(),
        ]))
        .unwrap();
    assert_eq!(
        execution.output.as_deref(),
        Some("Deleted context \"dev\".\nDeleted context \"staging\".")
    );
}

#[test]
fn test_unset_message() {
    let store = Arc::new(MemoryStore::with_contexts(&["dev"]));
    store.set_current("dev").unwrap();
    let (context, _dir) = run_context(&store);

    let execution = context.execute(&Command::Unset).unwrap();
    assert_eq!(execution.output.as_deref(), Some("Current context unset."));
}
