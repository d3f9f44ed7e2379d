//! Session-scoped key/value storage backing the result handoff.
//!
//! [`SessionStore`] is the adapter the handoff writes through. Two
//! implementations ship with the crate:
//! - [`MemoryStore`]: lives as long as the value, for tests and embedding
//! - [`FileSessionStore`]: one directory per session id under the cache
//!   folder, one file per key, so separate processes of the same session
//!   can hand a result to each other

use std::collections::HashMap;
use std::fs::{create_dir_all, read_dir, read_to_string, remove_dir, remove_file, write};
use std::path::PathBuf;

use varseq_core::errors::AnalysisError;

use super::consts::{DEFAULT_SESSION_EXT, DEFAULT_SESSION_SUBFOLDER};
use super::utils::{expand_path, get_default_cache_folder, get_default_session};

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AnalysisError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AnalysisError>;

    fn clear(&mut self, key: &str) -> Result<(), AnalysisError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AnalysisError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AnalysisError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), AnalysisError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed session store.
///
/// Layout: `<cache_folder>/sessions/<session_id>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    /// Path to the root cache directory
    pub cache_folder: PathBuf,
    /// Identifier of the session this store is scoped to
    pub session_id: String,
}

impl FileSessionStore {
    /// Open the store for a session, falling back to `VARSEQ_CACHE` /
    /// `VARSEQ_SESSION` (then `~/.varseq/` and `default`) for missing values.
    pub fn open(
        cache_folder: Option<PathBuf>,
        session_id: Option<String>,
    ) -> Result<Self, AnalysisError> {
        let cache_folder = expand_path(cache_folder.unwrap_or_else(get_default_cache_folder));
        let session_id = session_id.unwrap_or_else(get_default_session);
        check_name(&session_id)?;

        create_dir_all(&cache_folder)?;

        Ok(FileSessionStore {
            cache_folder,
            session_id,
        })
    }

    /// Directory holding this session's keys.
    pub fn session_folder(&self) -> PathBuf {
        self.cache_folder
            .join(DEFAULT_SESSION_SUBFOLDER)
            .join(&self.session_id)
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, AnalysisError> {
        check_name(key)?;
        Ok(self
            .session_folder()
            .join(format!("{}{}", key, DEFAULT_SESSION_EXT)))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AnalysisError> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AnalysisError> {
        let path = self.key_path(key)?;
        create_dir_all(self.session_folder())?;
        write(path, value)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), AnalysisError> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(());
        }
        remove_file(&path)?;

        // drop the session folder once its last key is gone
        let folder = self.session_folder();
        if read_dir(&folder)?.next().is_none() {
            remove_dir(&folder)?;
        }
        Ok(())
    }
}

/// Keys and session ids become path components, so keep them to one.
fn check_name(name: &str) -> Result<(), AnalysisError> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(AnalysisError::Storage(format!(
            "'{}' is not a valid session or key name",
            name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn tempdir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[rstest]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("two".to_string()));
        assert_eq!(store.len(), 1);

        store.clear("k").unwrap();
        assert!(store.is_empty());
    }

    #[rstest]
    fn test_file_store_round_trip(tempdir: TempDir) {
        let mut store =
            FileSessionStore::open(Some(tempdir.path().to_path_buf()), Some("s1".to_string()))
                .unwrap();

        assert_eq!(store.get("analysisResults").unwrap(), None);
        store.set("analysisResults", r#"{"a":1}"#).unwrap();
        assert_eq!(
            store.get("analysisResults").unwrap(),
            Some(r#"{"a":1}"#.to_string())
        );
        assert!(
            tempdir
                .path()
                .join("sessions/s1/analysisResults.json")
                .exists()
        );
    }

    #[rstest]
    fn test_sessions_are_isolated(tempdir: TempDir) {
        let root = Some(tempdir.path().to_path_buf());
        let mut first = FileSessionStore::open(root.clone(), Some("first".to_string())).unwrap();
        let second = FileSessionStore::open(root, Some("second".to_string())).unwrap();

        first.set("analysisResults", "x").unwrap();
        assert_eq!(second.get("analysisResults").unwrap(), None);
    }

    #[rstest]
    fn test_clear_removes_empty_session_folder(tempdir: TempDir) {
        let mut store =
            FileSessionStore::open(Some(tempdir.path().to_path_buf()), Some("s".to_string()))
                .unwrap();
        store.set("analysisResults", "x").unwrap();
        store.clear("analysisResults").unwrap();

        assert_eq!(store.get("analysisResults").unwrap(), None);
        assert!(!store.session_folder().exists());

        // clearing again is a no-op
        store.clear("analysisResults").unwrap();
    }

    #[rstest]
    #[case("")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    fn test_rejects_path_like_names(tempdir: TempDir, #[case] name: &str) {
        let opened = FileSessionStore::open(
            Some(tempdir.path().to_path_buf()),
            Some(name.to_string()),
        );
        assert!(matches!(opened, Err(AnalysisError::Storage(_))));

        let store =
            FileSessionStore::open(Some(tempdir.path().to_path_buf()), None).unwrap();
        assert!(matches!(store.get(name), Err(AnalysisError::Storage(_))));
    }
}
