//! Completion persistence (load/save to disk).

use super::types::{CompletionMap, CompletionStore};
use crate::core::constants::COMPLETION_FILE_NAME;
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use std::io;
use std::path::{Path, PathBuf};

/// Get the completion save file path (~/.scenario-quiz/completion.json).
pub fn completion_save_path() -> io::Result<PathBuf> {
    data_path(COMPLETION_FILE_NAME)
}

/// Load the completion map, or an empty one if the file is missing or invalid.
pub fn load_completion_map(path: &Path) -> CompletionMap {
    load_json_or_default(path)
}

/// Save the completion map.
pub fn save_completion_map(path: &Path, map: &CompletionMap) -> io::Result<()> {
    save_json(path, map)
}

/// Completion store backed by a JSON file.
///
/// Every `set` writes through. Write failures are logged and the in-memory
/// flag stays set; the next `set` retries the write, even if it changes nothing.
#[derive(Debug, Clone)]
pub struct FileCompletionStore {
    path: PathBuf,
    map: CompletionMap,
    /// In-memory map differs from the file after a failed write
    dirty: bool,
}

impl FileCompletionStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = load_completion_map(&path);
        log::debug!(
            "loaded {} completion(s) from {}",
            map.completed_count(),
            path.display()
        );
        Self {
            path,
            map,
            dirty: false,
        }
    }

    /// Open the store at the default location.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::open(completion_save_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn map(&self) -> &CompletionMap {
        &self.map
    }

    /// True while a failed write has left the file behind the map.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save(&mut self) -> io::Result<()> {
        save_completion_map(&self.path, &self.map)?;
        self.dirty = false;
        Ok(())
    }
}

impl CompletionStore for FileCompletionStore {
    fn get(&self, game_id: &str) -> bool {
        self.map.get(game_id)
    }

    fn set(&mut self, game_id: &str, completed: bool) {
        if self.map.get(game_id) == completed && !self.dirty {
            return;
        }
        self.map.set(game_id, completed);
        if let Err(e) = self.save() {
            self.dirty = true;
            log::warn!(
                "failed to save completion for '{}' to {}: {}",
                game_id,
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("scenario-quiz-completion-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_completion_save_path() {
        let path = completion_save_path().expect("path should resolve");
        assert!(path.to_string_lossy().ends_with("completion.json"));
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let store = FileCompletionStore::open(temp_store_path("missing.json"));
        assert_eq!(store.map().completed_count(), 0);
        assert!(!store.get("budget-basics"));
    }

    #[test]
    fn test_set_writes_through() {
        let path = temp_store_path("write_through.json");
        fs::remove_file(&path).ok();

        let mut store = FileCompletionStore::open(&path);
        store.set("budget-basics", true);

        let reopened = FileCompletionStore::open(&path);
        assert!(reopened.get("budget-basics"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_clear_writes_through() {
        let path = temp_store_path("clear.json");
        fs::remove_file(&path).ok();

        let mut store = FileCompletionStore::open(&path);
        store.set("budget-basics", true);
        store.set("budget-basics", false);

        let reopened = FileCompletionStore::open(&path);
        assert!(!reopened.get("budget-basics"));

        fs::remove_file(path).ok();
    }
}
