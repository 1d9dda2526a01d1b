//! Integration tests for the cctx context switching CLI

mod command_surface;
mod switch_flow;

use cctx::cli::RunContext;
use cctx::config::CctxConfig;
use cctx::state::StateFile;
use cctx::store::MemoryStore;
use std::sync::Arc;
use tempfile::TempDir;

/// Build a non-interactive run context over a shared in-memory store and a
/// temp-backed state file. The store stays inspectable from the test.
pub fn run_context(store: &Arc<MemoryStore>) -> (RunContext, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = StateFile::new(dir.path().join("state.json"));
    let context = RunContext::with_parts(
        CctxConfig::default(),
        Box::new(Arc::clone(store)),
        state,
        false,
    );
    (context, dir)
}
