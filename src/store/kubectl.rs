//! Production context store backed by the external cluster-config tool.
//!
//! Every operation is one blocking subprocess invocation; no output is
//! cached. A missing binary is reported as `ToolMissing` before any state
//! is touched.

use super::ContextStore;
use crate::error::CtxError;
use std::process::{Command, Output};
use tracing::debug;

pub struct KubectlStore {
    tool: String,
}

impl KubectlStore {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    fn run(&self, args: &[&str]) -> Result<Output, CtxError> {
        debug!(tool = %self.tool, ?args, "Invoking context store");
        Command::new(&self.tool).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CtxError::ToolMissing(self.tool.clone())
            } else {
                CtxError::Io(e)
            }
        })
    }

    /// Run and require success; returns trimmed stdout.
    fn run_ok(&self, args: &[&str]) -> Result<String, CtxError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(CtxError::Lookup(stderr_line(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn stderr_line(output: &Output) -> String {
    let text = String::from_utf8_lossy(&output.stderr);
    let line = text.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        format!("exit status {}", output.status)
    } else {
        line.to_string()
    }
}

impl ContextStore for KubectlStore {
    fn list(&self) -> Result<Vec<String>, CtxError> {
        let stdout = self.run_ok(&["config", "get-contexts", "-o", "name"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn current(&self) -> Result<String, CtxError> {
        let output = self.run(&["config", "current-context"])?;
        if output.status.success() {
            let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if name.is_empty() {
                return Err(CtxError::NoCurrentContext);
            }
            return Ok(name);
        }

        let message = stderr_line(&output);
        if message.contains("current-context is not set") {
            Err(CtxError::NoCurrentContext)
        } else {
            Err(CtxError::Lookup(message))
        }
    }

    fn set_current(&self, name: &str) -> Result<(), CtxError> {
        let output = self.run(&["config", "use-context", name])?;
        if output.status.success() {
            return Ok(());
        }

        let message = stderr_line(&output);
        if message.contains("no context exists") {
            Err(CtxError::NotFound(name.to_string()))
        } else {
            Err(CtxError::Lookup(message))
        }
    }

    fn unset_current(&self) -> Result<(), CtxError> {
        self.run_ok(&["config", "unset", "current-context"])?;
        Ok(())
    }

    fn rename(&self, old: &str, new: &str) -> Result<(), CtxError> {
        self.run_ok(&["config", "rename-context", old, new])?;
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), CtxError> {
        let output = self.run(&["config", "delete-context", name])?;
        if output.status.success() {
            return Ok(());
        }

        let message = stderr_line(&output);
        if message.contains("not found") || message.contains("no context exists") {
            Err(CtxError::NotFound(name.to_string()))
        } else {
            Err(CtxError::Lookup(message))
        }
    }

    fn directory_of(&self, name: &str) -> Result<Option<String>, CtxError> {
        let jsonpath = format!(
            "-o=jsonpath={{.contexts[?(@.name==\"{}\")].context.namespace}}",
            name
        );
        let directory = self.run_ok(&["config", "view", &jsonpath])?;
        if directory.is_empty() {
            Ok(None)
        } else {
            Ok(Some(directory))
        }
    }
}
