use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Session;

mod backends;
pub use self::backends::{FileBackend, MemoryBackend};

pub const TOKEN_KEY: &str = "neocontrole_token";
pub const DISPLAY_NAME_KEY: &str = "neocontrole_usuario";
pub const USERNAME_KEY: &str = "neocontrole_username";

/// String key-value storage the session is persisted into.
pub trait KvBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Best-effort persistence of the session.
///
/// Every entry is read and written on its own; a failure on one key never
/// affects the others and never reaches the caller.
pub struct SessionStore {
    backend: Box<dyn KvBackend>,
}

impl SessionStore {
    pub fn new(backend: impl KvBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn file(state_dir: &Path) -> Self {
        Self::new(FileBackend::new(state_dir))
    }

    pub fn memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    pub fn load(&self) -> Session {
        Session {
            token: self.read(TOKEN_KEY),
            username: self.read(USERNAME_KEY),
            display_name: self.read(DISPLAY_NAME_KEY),
        }
    }

    pub fn save(&mut self, session: &Session) {
        self.write(TOKEN_KEY, session.token.as_deref());
        self.write(DISPLAY_NAME_KEY, session.display_name.as_deref());
        self.write(USERNAME_KEY, session.username.as_deref());
    }

    pub fn clear(&mut self) {
        self.save(&Session::default());
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(v) => v.filter(|s| !s.is_empty()),
            Err(err) => {
                tracing::debug!(key, error = %format!("{:#}", err), "session entry unreadable");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: Option<&str>) {
        let res = match value.filter(|s| !s.is_empty()) {
            Some(v) => self.backend.set(key, v),
            None => self.backend.remove(key),
        };
        if let Err(err) = res {
            tracing::debug!(key, error = %format!("{:#}", err), "session entry not persisted");
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
