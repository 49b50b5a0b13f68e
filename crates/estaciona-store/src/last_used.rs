//! Last-used vehicle marker

use estaciona_types::Result;
use std::fs;
use std::path::PathBuf;

/// Remembers the id of the vehicle last used for a successful request.
///
/// Stored as a bare string in its own file next to the vehicle store.
/// Staleness is expected: the id may no longer name an existing vehicle,
/// in which case callers fall back to the first one.
pub struct LastUsedStore {
    path: PathBuf,
}

impl LastUsedStore {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            path: store_dir.join("last_used"),
        })
    }

    /// The stored id, if any. Read failures count as "nothing stored".
    pub fn get(&self) -> Option<String> {
        let id = fs::read_to_string(&self.path).ok()?;
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    /// Record an id. Write failure is logged and swallowed.
    pub fn set(&self, id: &str) {
        if let Err(e) = fs::write(&self.path, id) {
            log::error!("Failed to save {}: {}", self.path.display(), e);
        }
    }
}
