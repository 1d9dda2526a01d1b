//! Cctx CLI Binary
//!
//! Command-line interface for cluster context switching.

use cctx::cli::{Cli, Command, RunContext};
use cctx::logging::init_logging;
use cctx::shell;
use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let is_usage_error = e.use_stderr();
            let _ = e.print();
            process::exit(if is_usage_error { 1 } else { 0 });
        }
    };

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let command = match Command::from_cli(&cli) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let context = match RunContext::new() {
        Ok(context) => context,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match context.execute(&command) {
        Ok(execution) => {
            if let Some(output) = execution.output {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            if let Some(hand_off) = execution.hand_off {
                if let Err(e) = shell::hand_off(&hand_off) {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
