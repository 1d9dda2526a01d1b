//! In-memory context store.
//!
//! Mirrors the observable behavior of the subprocess-backed store closely
//! enough for engine and CLI tests: insertion-ordered listing, a current
//! pointer that follows renames and dangles after deletes, and credential
//! entries that survive context deletion.

use super::ContextStore;
use crate::error::CtxError;
use std::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    directory: Option<String>,
    user: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<Entry>,
    current: Option<String>,
    users: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with bare named contexts.
    pub fn with_contexts(names: &[&str]) -> Self {
        let store = Self::new();
        for name in names {
            store.add(name, None, None);
        }
        store
    }

    /// Add a context, optionally with a working directory and a credential
    /// entry it references. Credential entries are shared by name.
    pub fn add(&self, name: &str, directory: Option<&str>, user: Option<&str>) {
        let mut inner = self.inner.write().unwrap();
        if let Some(user) = user {
            if !inner.users.iter().any(|u| u == user) {
                inner.users.push(user.to_string());
            }
        }
        inner.entries.push(Entry {
            name: name.to_string(),
            directory: directory.map(str::to_string),
            user: user.map(str::to_string),
        });
    }

    /// Credential entries currently in the store.
    pub fn users(&self) -> Vec<String> {
        self.inner.read().unwrap().users.clone()
    }

    /// Credential entry referenced by a context, if any.
    pub fn user_of(&self, name: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap()
            .entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.user.clone())
    }
}

impl ContextStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>, CtxError> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .entries
            .iter()
            .map(|e| e.name.clone())
            .collect())
    }

    fn current(&self) -> Result<String, CtxError> {
        self.inner
            .read()
            .unwrap()
            .current
            .clone()
            .ok_or(CtxError::NoCurrentContext)
    }

    fn set_current(&self, name: &str) -> Result<(), CtxError> {
        let mut inner = self.inner.write().unwrap();
        if !inner.entries.iter().any(|e| e.name == name) {
            return Err(CtxError::NotFound(name.to_string()));
        }
        inner.current = Some(name.to_string());
        Ok(())
    }

    fn unset_current(&self) -> Result<(), CtxError> {
        self.inner.write().unwrap().current = None;
        Ok(())
    }

    fn rename(&self, old: &str, new: &str) -> Result<(), CtxError> {
        let mut inner = self.inner.write().unwrap();
        if old != new && inner.entries.iter().any(|e| e.name == new) {
            return Err(CtxError::Lookup(format!(
                "cannot rename to \"{}\", it already exists",
                new
            )));
        }
        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.name == old)
            .ok_or_else(|| CtxError::NotFound(old.to_string()))?;
        entry.name = new.to_string();
        if inner.current.as_deref() == Some(old) {
            inner.current = Some(new.to_string());
        }
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), CtxError> {
        let mut inner = self.inner.write().unwrap();
        let index = inner
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| CtxError::NotFound(name.to_string()))?;
        inner.entries.remove(index);
        // The current pointer is left dangling, as the real tool does.
        Ok(())
    }

    fn directory_of(&self, name: &str) -> Result<Option<String>, CtxError> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.directory.clone()))
    }
}
