//! CLI domain: parse, route, and presentation only.
//! No domain orchestration; single route table dispatches to the switch engine.

mod parse;
mod presentation;
mod route;

pub use parse::{Cli, Command};
pub use presentation::{color_enabled, format_listing};
pub use route::{Execution, RunContext};
