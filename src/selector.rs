//! Interactive context selection.
//!
//! Primary path: feed the highlighted listing to an external fuzzy picker
//! and take the chosen line. When the picker binary is not installed, a
//! built-in menu stands in. Cancellation is an error, never a fallback to
//! plain listing.

use crate::config::ENV_IGNORE_PICKER;
use crate::error::CtxError;
use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};
use tracing::debug;

/// Whether the no-argument invocation should select interactively:
/// stdout must be a terminal and the opt-out must not be set.
pub fn interactive_wanted() -> bool {
    if std::env::var(ENV_IGNORE_PICKER).map_or(false, |v| !v.is_empty()) {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub struct Selector {
    picker: String,
}

impl Selector {
    pub fn new(picker: impl Into<String>) -> Self {
        Self {
            picker: picker.into(),
        }
    }

    /// Pick one context. `feed` is the ANSI-highlighted listing for the
    /// external picker; `items` are the plain names for the built-in menu.
    pub fn pick(&self, feed: &str, items: &[String]) -> Result<String, CtxError> {
        match self.pick_external(feed) {
            Err(CtxError::ToolMissing(picker)) => {
                debug!(picker = %picker, "Picker not installed, using built-in menu");
                self.pick_builtin(items)
            }
            other => other,
        }
    }

    fn pick_external(&self, feed: &str) -> Result<String, CtxError> {
        let mut child = Command::new(&self.picker)
            .arg("--ansi")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CtxError::ToolMissing(self.picker.clone())
                } else {
                    CtxError::Io(e)
                }
            })?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| CtxError::Lookup("Picker stdin unavailable".to_string()))?;
            stdin.write_all(feed.as_bytes())?;
            if !feed.ends_with('\n') {
                stdin.write_all(b"\n")?;
            }
        }

        let output = child.wait_with_output()?;
        let choice = strip_ansi(String::from_utf8_lossy(&output.stdout).trim());
        if !output.status.success() || choice.is_empty() {
            return Err(CtxError::SelectionCancelled);
        }
        Ok(choice)
    }

    fn pick_builtin(&self, items: &[String]) -> Result<String, CtxError> {
        use dialoguer::Select;

        let selection = Select::new()
            .with_prompt("Switch to context")
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| CtxError::Config(format!("Failed to get user input: {}", e)))?;

        match selection {
            Some(index) => Ok(items[index].clone()),
            None => Err(CtxError::SelectionCancelled),
        }
    }
}

/// Remove ANSI SGR sequences from a picked line.
fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_plain() {
        assert_eq!(strip_ansi("dev"), "dev");
    }

    #[test]
    fn test_strip_ansi_highlighted() {
        assert_eq!(strip_ansi("\x1b[1;33mdev\x1b[0m"), "dev");
    }

    #[test]
    fn test_strip_ansi_mixed() {
        assert_eq!(strip_ansi("a\x1b[32mb\x1b[0mc"), "abc");
    }
}
