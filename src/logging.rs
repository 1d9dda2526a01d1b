//! Logging System
//!
//! Structured logging via the `tracing` crate. Diagnostics always go to
//! stderr: stdout is reserved for listings and the picker feed. The filter
//! comes from the `CCTX_LOG` environment variable when set, otherwise from
//! the `--verbose` flag.

use crate::config::ENV_LOG;
use crate::error::CtxError;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the logging system.
///
/// Priority order (highest to lowest):
/// 1. `CCTX_LOG` environment variable (full filter directives)
/// 2. `--verbose` flag (info level)
/// 3. Default (warnings only)
pub fn init_logging(verbose: bool) -> Result<(), CtxError> {
    let filter = match EnvFilter::try_from_env(ENV_LOG) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if verbose { "info" } else { "warn" }),
    };

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| CtxError::Config(format!("Failed to initialize logging: {}", e)))
}
