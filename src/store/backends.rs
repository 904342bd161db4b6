use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};

use super::{KvBackend, write_atomic};

const SESSION_FILE: &str = "session.json";

/// Flat JSON object of string values in `<state_dir>/session.json`.
#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let bytes = fs::read(&self.path).context("read session.json")?;
        let v: Value = serde_json::from_slice(&bytes).context("parse session.json")?;
        match v {
            Value::Object(map) => Ok(map),
            _ => Err(anyhow!("session.json is not an object")),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(map).context("serialize session")?;
        write_atomic(&self.path, &bytes).context("write session.json")
    }

    // A corrupt file must not block writes of the other entries.
    fn read_map_for_update(&self) -> Map<String, Value> {
        self.read_map().unwrap_or_default()
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map()?;
        match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(anyhow!("session entry {} is not a string", key)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map_for_update();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut map = self.read_map_for_update();
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let m = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store poisoned"))?;
        Ok(m.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut m = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store poisoned"))?;
        m.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut m = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store poisoned"))?;
        m.remove(key);
        Ok(())
    }
}
