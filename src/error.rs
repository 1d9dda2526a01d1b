//! Error types for the cctx context switching system.

use thiserror::Error;

/// Errors surfaced by context operations.
///
/// Every failure is reported once on the diagnostic stream and terminates
/// the invocation with a nonzero status; no operation is retried.
#[derive(Debug, Error)]
pub enum CtxError {
    #[error("Required tool not found on PATH: {0}")]
    ToolMissing(String),

    #[error("Failed to read context store: {0}")]
    Lookup(String),

    #[error("Context not found: {0}")]
    NotFound(String),

    #[error("No current context is set")]
    NoCurrentContext,

    #[error("No previous context recorded; switch contexts once before swapping")]
    NoPreviousContext,

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("State file error: {0}")]
    State(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}
