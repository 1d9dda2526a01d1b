//! Context store abstraction.
//!
//! The external cluster-config tool is the authoritative source of context
//! definitions and the current-context pointer; this module only defines
//! the seam. `KubectlStore` shells out to the real tool, `MemoryStore`
//! backs tests and examples without touching a process boundary.

mod kubectl;
mod memory;

pub use kubectl::KubectlStore;
pub use memory::MemoryStore;

use crate::error::CtxError;

/// Authoritative store of contexts and the current-context pointer.
///
/// Names are unique within the store at any instant. Listing order is the
/// store's own order and is stable across calls with no intervening
/// mutation.
pub trait ContextStore {
    /// All context names, in store order.
    fn list(&self) -> Result<Vec<String>, CtxError>;

    /// Name of the current context.
    ///
    /// Fails with [`CtxError::NoCurrentContext`] when the pointer is unset
    /// and [`CtxError::Lookup`] when the store cannot be read.
    fn current(&self) -> Result<String, CtxError>;

    /// Point the store's current pointer at `name`.
    ///
    /// Fails with [`CtxError::NotFound`] when `name` does not exist; the
    /// store is not modified in that case.
    fn set_current(&self, name: &str) -> Result<(), CtxError>;

    /// Clear the current pointer.
    fn unset_current(&self) -> Result<(), CtxError>;

    /// Rename a context. The current pointer moves along with the entry.
    fn rename(&self, old: &str, new: &str) -> Result<(), CtxError>;

    /// Delete a context. Credential entries the context references are
    /// left untouched.
    fn delete(&self, name: &str) -> Result<(), CtxError>;

    /// Working directory associated with `name`, if any.
    fn directory_of(&self, name: &str) -> Result<Option<String>, CtxError>;
}

impl<S: ContextStore + ?Sized> ContextStore for std::sync::Arc<S> {
    fn list(&self) -> Result<Vec<String>, CtxError> {
        (**self).list()
    }

    fn current(&self) -> Result<String, CtxError> {
        (**self).current()
    }

    fn set_current(&self, name: &str) -> Result<(), CtxError> {
        (**self).set_current(name)
    }

    fn unset_current(&self) -> Result<(), CtxError> {
        (**self).unset_current()
    }

    fn rename(&self, old: &str, new: &str) -> Result<(), CtxError> {
        (**self).rename(old, new)
    }

    fn delete(&self, name: &str) -> Result<(), CtxError> {
        (**self).delete(name)
    }

    fn directory_of(&self, name: &str) -> Result<Option<String>, CtxError> {
        (**self).directory_of(name)
    }
}
