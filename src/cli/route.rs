//! CLI route: single route table and run context. Dispatches to the switch
//! engine, selector, and presentation; never executes the hand-off itself.

use crate::config::CctxConfig;
use crate::engine::{HandOff, SwitchEngine};
use crate::error::CtxError;
use crate::selector::{self, Selector};
use crate::state::StateFile;
use crate::store::{ContextStore, KubectlStore};

use super::parse::Command;
use super::presentation;

/// Outcome of one invocation: printable output plus an optional terminal
/// hand-off the binary must execute last.
pub struct Execution {
    pub output: Option<String>,
    pub hand_off: Option<HandOff>,
}

impl Execution {
    fn text(output: String) -> Self {
        Self {
            output: Some(output),
            hand_off: None,
        }
    }

    fn switched(hand_off: HandOff) -> Self {
        Self {
            output: Some(format!("Switched to context \"{}\".", hand_off.context)),
            hand_off: Some(hand_off),
        }
    }
}

/// Runtime context for CLI execution: config, store handle, and state file.
pub struct RunContext {
    config: CctxConfig,
    store: Box<dyn ContextStore>,
    state: StateFile,
    interactive: bool,
}

impl RunContext {
    /// Production wiring: subprocess-backed store, state file in the user
    /// cache directory, interactivity from the terminal and environment.
    pub fn new() -> Result<Self, CtxError> {
        let config = CctxConfig::load()?;
        let store = Box::new(KubectlStore::new(config.tool.clone()));
        let state = StateFile::default_location()?;
        let interactive = selector::interactive_wanted();
        Ok(Self {
            config,
            store,
            state,
            interactive,
        })
    }

    /// Explicit wiring, used by tests to inject a store and a state path.
    pub fn with_parts(
        config: CctxConfig,
        store: Box<dyn ContextStore>,
        state: StateFile,
        interactive: bool,
    ) -> Self {
        Self {
            config,
            store,
            state,
            interactive,
        }
    }

    /// Execute a command via the single route table.
    pub fn execute(&self, command: &Command) -> Result<Execution, CtxError> {
        let engine = SwitchEngine::new(self.store.as_ref(), &self.state);
        match command {
            Command::Default if self.interactive => {
                let entries = engine.list()?;
                if entries.is_empty() {
                    return Err(CtxError::Lookup("No contexts found".to_string()));
                }
                let feed = presentation::format_listing(&entries, &self.config, true);
                let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
                let choice = Selector::new(self.config.picker.clone()).pick(&feed, &names)?;
                Ok(Execution::switched(engine.switch_to(&choice)?))
            }
            Command::Default => {
                let entries = engine.list()?;
                let color = presentation::color_enabled(false);
                Ok(Execution::text(presentation::format_listing(
                    &entries,
                    &self.config,
                    color,
                )))
            }
            Command::Current => Ok(Execution::text(engine.current()?)),
            Command::Switch(name) => Ok(Execution::switched(engine.switch_to(name)?)),
            Command::Swap => Ok(Execution::switched(engine.swap()?)),
            Command::Unset => {
                engine.unset()?;
                Ok(Execution::text("Current context unset.".to_string()))
            }
            Command::Delete(names) => {
                let deleted = engine.delete_many(names)?;
                let output = deleted
                    .iter()
                    .map(|name| format!("Deleted context \"{}\".", name))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Execution::text(output))
            }
            Command::Rename { old, new } => {
                let old = engine.rename(old, new)?;
                Ok(Execution::text(format!(
                    "Renamed context \"{}\" to \"{}\".",
                    old, new
                )))
            }
        }
    }
}
