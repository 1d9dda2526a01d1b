//! Context Switch Engine
//!
//! The state machine over the external store and the local switch record.
//! Operations validate against the store before mutating anything local,
//! and a switch returns its terminal side effect as a value instead of
//! executing it: the caller runs the hand-off last, after all output.

use crate::error::CtxError;
use crate::state::StateFile;
use crate::store::ContextStore;
use tracing::{debug, warn};

/// One listing row: a context name plus whether it is the store's current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    pub name: String,
    pub active: bool,
}

/// Terminal side effect of a successful switch: change into the context's
/// directory (when it has one) and replace the process with an interactive
/// shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOff {
    pub context: String,
    pub directory: Option<String>,
}

pub struct SwitchEngine<'a> {
    store: &'a dyn ContextStore,
    state: &'a StateFile,
}

impl<'a> SwitchEngine<'a> {
    pub fn new(store: &'a dyn ContextStore, state: &'a StateFile) -> Self {
        Self { store, state }
    }

    /// All contexts in store order, with the current one marked.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn list(&self) -> Result<Vec<ContextEntry>, CtxError> {
        let current = self.current_or_none()?;
        Ok(self
            .store
            .list()?
            .into_iter()
            .map(|name| {
                let active = current.as_deref() == Some(name.as_str());
                ContextEntry { name, active }
            })
            .collect())
    }

    /// Name of the current context, straight from the store.
    pub fn current(&self) -> Result<String, CtxError> {
        self.store.current()
    }

    /// Switch to `name` and return the hand-off to execute.
    ///
    /// The store validates `name` before the local record is touched, so a
    /// failed switch never writes a bogus previous-context entry. Switching
    /// to the already-current context leaves the record untouched.
    pub fn switch_to(&self, name: &str) -> Result<HandOff, CtxError> {
        let prev = self.current_or_none()?;
        self.store.set_current(name)?;

        if prev.as_deref() != Some(name) {
            self.state.record_switch(name, prev.as_deref())?;
        }

        let directory = self.store.directory_of(name)?;
        if directory.is_none() {
            debug!(context = name, "Context has no directory; hand-off keeps the working directory");
        }
        Ok(HandOff {
            context: name.to_string(),
            directory,
        })
    }

    /// Switch back to the previously recorded context.
    ///
    /// A previous entry that was deleted or renamed since it was recorded
    /// is attempted as-is and surfaces the store's not-found error.
    pub fn swap(&self) -> Result<HandOff, CtxError> {
        let state = self.state.read()?;
        if state.previous.is_empty() {
            return Err(CtxError::NoPreviousContext);
        }
        self.switch_to(&state.previous)
    }

    /// Rename a context; `"."` names the current one.
    ///
    /// An existing context named `new` is deleted first, with a warning.
    /// Returns the resolved old name.
    pub fn rename(&self, old: &str, new: &str) -> Result<String, CtxError> {
        let old = self.resolve(old)?;
        let names = self.store.list()?;
        if !names.iter().any(|n| n == &old) {
            return Err(CtxError::NotFound(old));
        }
        if old != new && names.iter().any(|n| n == new) {
            warn!(context = new, "Overwriting existing context");
            self.store.delete(new)?;
        }
        self.store.rename(&old, new)?;
        Ok(old)
    }

    /// Delete contexts by name; `"."` resolves to the current one per item.
    ///
    /// Aborts on the first unknown name with no rollback of earlier
    /// deletions. Credential entries referenced by deleted contexts are
    /// never touched.
    pub fn delete_many(&self, names: &[String]) -> Result<Vec<String>, CtxError> {
        let mut deleted = Vec::with_capacity(names.len());
        for raw in names {
            let name = self.resolve(raw)?;
            if !self.store.list()?.iter().any(|n| n == &name) {
                return Err(CtxError::NotFound(name));
            }
            if self.current_or_none()?.as_deref() == Some(name.as_str()) {
                warn!(context = %name, "Deleting the currently active context");
            }
            self.store.delete(&name)?;
            deleted.push(name);
        }
        Ok(deleted)
    }

    /// Clear the store's current pointer. The recorded previous context
    /// survives, so a later swap still works.
    pub fn unset(&self) -> Result<(), CtxError> {
        self.store.unset_current()
    }

    fn resolve(&self, name: &str) -> Result<String, CtxError> {
        if name == "." {
            self.store.current()
        } else {
            Ok(name.to_string())
        }
    }

    /// Current pointer as an option: unset is a normal state here, only an
    /// unreadable store is an error.
    fn current_or_none(&self) -> Result<Option<String>, CtxError> {
        match self.store.current() {
            Ok(name) => Ok(Some(name)),
            Err(CtxError::NoCurrentContext) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
