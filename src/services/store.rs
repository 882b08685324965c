// Author: Dustin Pilgrim
// License: MIT

use std::{collections::HashMap, fs, io, path::PathBuf};

use eyre::{Result, WrapErr};

use crate::core::session::Session;
use crate::{sdebug, swarn};

/// Key/value persistence for the session blob.
pub trait Store {
    /// `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per key under `~/.local/share/spellwatch/`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("spellwatch")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        FileStore::new(FileStore::default_dir())
    }
}

impl Store for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .wrap_err_with(|| format!("failed to create {}", self.dir.display()))?;

        // Write then rename so a crash never leaves half a session behind.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).wrap_err_with(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path).wrap_err_with(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to remove {}", path.display())),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stored session, or a fresh one when nothing usable is stored.
pub fn restore_session(store: &dyn Store, key: &str) -> Session {
    match store.load(key) {
        Ok(Some(bytes)) => Session::from_json(&bytes).unwrap_or_else(|| {
            swarn!("Store", "stored session under '{}' is unreadable, starting fresh", key);
            Session::new()
        }),
        Ok(None) => {
            sdebug!("Store", "no stored session under '{}'", key);
            Session::new()
        }
        Err(e) => {
            swarn!("Store", "failed to load session: {:#}", e);
            Session::new()
        }
    }
}

/// Best effort; failures are logged and otherwise ignored.
pub fn persist_session(store: &mut dyn Store, key: &str, session: &Session) {
    let bytes = match session.to_json() {
        Ok(b) => b,
        Err(e) => {
            swarn!("Store", "failed to encode session: {}", e);
            return;
        }
    };

    if let Err(e) = store.save(key, &bytes) {
        swarn!("Store", "failed to save session: {:#}", e);
    }
}

pub fn clear_session(store: &mut dyn Store, key: &str) {
    if let Err(e) = store.remove(key) {
        swarn!("Store", "failed to remove stored session: {:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{Role, SpellKey};

    const KEY: &str = "spells-cd-slots-v1";

    #[test]
    fn persisted_session_is_restored_verbatim() {
        let mut store = MemoryStore::default();
        let mut s = Session::new();
        s.start_spell(Role::Adc, SpellKey::Spell2, 42_000);
        s.assign_champion(Role::Adc, Some("Jinx".into()));
        s.set_highlighted(Role::Jungle);

        persist_session(&mut store, KEY, &s);
        assert_eq!(restore_session(&store, KEY), s);
    }

    #[test]
    fn missing_or_malformed_data_yields_initial_session() {
        let mut store = MemoryStore::default();
        assert_eq!(restore_session(&store, KEY), Session::new());

        store.save(KEY, b"{not json").unwrap();
        assert_eq!(restore_session(&store, KEY), Session::new());
    }

    #[test]
    fn clear_removes_the_key() {
        let mut store = MemoryStore::default();
        persist_session(&mut store, KEY, &Session::new());
        assert!(store.load(KEY).unwrap().is_some());

        clear_session(&mut store, KEY);
        assert!(store.load(KEY).unwrap().is_none());
        clear_session(&mut store, KEY);
    }

    #[test]
    fn key_is_sanitized_into_a_file_name() {
        let store = FileStore::new("/var/empty/spellwatch");
        assert_eq!(
            store.path_for("../x y"),
            PathBuf::from("/var/empty/spellwatch/___x_y.json")
        );
        assert_eq!(
            store.path_for(KEY),
            PathBuf::from("/var/empty/spellwatch/spells-cd-slots-v1.json")
        );
    }
}
