use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The single client-local storage slot holding the serialized session.
///
/// Implementations hold one opaque string value; interpreting it is the
/// session manager's job.
pub trait SessionStore {
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, raw: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// File-backed store: one JSON document at a caller-chosen path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn save(&self, raw: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> io::Result<Option<String>> {
        let slot = self.slot.lock().unwrap_or_else(|err| err.into_inner());
        Ok(slot.clone())
    }

    fn save(&self, raw: &str) -> io::Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|err| err.into_inner());
        *slot = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|err| err.into_inner());
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("session.json"));

        assert_eq!(store.load().unwrap(), None);
        store.save("{\"k\":1}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"k\":1}"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // clearing an already-empty slot is not an error
        store.clear().unwrap();
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("nested/deeper/session.json"));
        store.save("{}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{}"));
    }
}
