//! Post-switch hand-off.
//!
//! The terminal action of a switch: change into the context's directory
//! and replace this process with an interactive shell. Must run last; on
//! Unix it only returns on exec failure.

use crate::engine::HandOff;
use crate::error::CtxError;
use std::env;
use std::process::Command;
use tracing::warn;

pub fn hand_off(hand_off: &HandOff) -> Result<(), CtxError> {
    if let Some(dir) = hand_off.directory.as_deref() {
        if !dir.is_empty() {
            if let Err(e) = env::set_current_dir(dir) {
                warn!(directory = dir, "Failed to change directory: {}", e);
            }
        }
    }

    let shell = env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
    exec_shell(&shell)
}

#[cfg(unix)]
fn exec_shell(shell: &str) -> Result<(), CtxError> {
    use std::os::unix::process::CommandExt;
    Err(CtxError::Io(Command::new(shell).exec()))
}

#[cfg(not(unix))]
fn exec_shell(shell: &str) -> Result<(), CtxError> {
    let status = Command::new(shell).status()?;
    std::process::exit(status.code().unwrap_or(0));
}
