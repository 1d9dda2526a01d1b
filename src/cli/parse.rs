//! CLI parse: clap types for Cctx plus the closed command set. No behavior;
//! definitions only, and one central fold from argument vector to command.

use crate::error::CtxError;
use clap::Parser;

/// Cctx CLI - fast cluster context switching
#[derive(Parser)]
#[command(name = "cctx")]
#[command(about = "Fast cluster context switching with per-context working directories")]
#[command(version)]
pub struct Cli {
    /// Context to switch to, `-` to swap back, or `NEW=OLD` to rename
    #[arg(
        value_name = "TARGET",
        allow_hyphen_values = true,
        conflicts_with_all = ["current", "unset", "delete"]
    )]
    pub target: Option<String>,

    /// Show the current context name
    #[arg(short = 'c', long = "current", conflicts_with_all = ["unset", "delete"])]
    pub current: bool,

    /// Unset the current context
    #[arg(short = 'u', long = "unset", conflicts_with = "delete")]
    pub unset: bool,

    /// Delete one or more contexts (`.` for the current one)
    #[arg(short = 'd', long = "delete", value_name = "NAME", num_args = 1..)]
    pub delete: Vec<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

/// The closed command set, produced from the argument vector before any
/// engine call. Malformed input is rejected here, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: list, or select interactively on a terminal.
    Default,
    Switch(String),
    Swap,
    Current,
    Unset,
    Delete(Vec<String>),
    Rename { old: String, new: String },
}

impl Command {
    pub fn from_cli(cli: &Cli) -> Result<Self, CtxError> {
        if cli.current {
            return Ok(Command::Current);
        }
        if cli.unset {
            return Ok(Command::Unset);
        }
        if !cli.delete.is_empty() {
            return Ok(Command::Delete(cli.delete.clone()));
        }

        match cli.target.as_deref() {
            None => Ok(Command::Default),
            Some("-") => Ok(Command::Swap),
            Some(target) if target.starts_with('-') => {
                Err(CtxError::Usage(format!("Unrecognized flag: {}", target)))
            }
            Some(target) => match target.split_once('=') {
                Some((new, old)) => {
                    if new.is_empty() || old.is_empty() {
                        return Err(CtxError::Usage(format!(
                            "Invalid rename (expected NEW=OLD): {}",
                            target
                        )));
                    }
                    Ok(Command::Rename {
                        old: old.to_string(),
                        new: new.to_string(),
                    })
                }
                None => Ok(Command::Switch(target.to_string())),
            },
        }
    }
}
