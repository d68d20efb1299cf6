//! # Progress Store
//!
//! On-device persistence for [`LearningProgress`].
//!
//! Progress is a convenience, not a record: if the file is missing,
//! unreadable or corrupt, the user starts from an empty map and a warning
//! is logged. Only write failures are reported to the caller.
//!
//! ```text
//! LearningService ──load()──► ProgressStore ──► learning-progress.json
//!                 ◄─────────                ◄──  (or {} on any failure)
//! ```

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use smartassist_core::learning::LearningProgress;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

/// Loads and saves learning progress.
pub trait ProgressStore: Send + Sync {
    /// Never fails: unreadable progress is treated as empty.
    fn load(&self) -> LearningProgress;

    fn save(&self, progress: &LearningProgress) -> ClientResult<()>;
}

// =============================================================================
// JSON File Store
// =============================================================================

/// Progress kept as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProgressStore {
    path: PathBuf,
}

impl JsonFileProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileProgressStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileProgressStore {
    fn load(&self) -> LearningProgress {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "No learning progress file yet");
                return LearningProgress::default();
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Failed to read learning progress");
                return LearningProgress::default();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = ?self.path, error = %e, "Failed to parse learning progress");
            LearningProgress::default()
        })
    }

    fn save(&self, progress: &LearningProgress) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(progress)?;
        std::fs::write(&self.path, json)?;
        debug!(path = ?self.path, "Learning progress saved");
        Ok(())
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Progress held in memory only; lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    progress: Mutex<LearningProgress>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self) -> LearningProgress {
        self.progress
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn save(&self, progress: &LearningProgress) -> ClientResult<()> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        *guard = progress.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartassist_core::Category;

    fn sample() -> LearningProgress {
        let mut progress = LearningProgress::new();
        progress.mark_complete(Category::GstBasics, "What is GST?");
        progress
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProgressStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileProgressStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_round_trip_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProgressStore::new(dir.path().join("a").join("progress.json"));

        store.save(&sample()).unwrap();
        assert!(store
            .load()
            .is_complete(Category::GstBasics, "What is GST?"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryProgressStore::new();
        assert!(store.load().is_empty());
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
    }
}
