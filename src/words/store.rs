use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied reading approved words file {0}")]
    PermissionDenied(PathBuf),

    #[error("failed to serialize approved words: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The approved-word list plus the JSON file backing it.
///
/// Load failures are handled three distinct ways, matching the service's
/// startup contract: a missing file is an empty list, a permission failure is
/// fatal, and anything else (unreadable file, malformed JSON) is logged and
/// treated as empty.
#[derive(Debug)]
pub struct ApprovedWordStore {
    path: PathBuf,
    words: Vec<String>,
}

impl ApprovedWordStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let words = match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<Vec<String>>(&data) {
                Ok(words) => words,
                Err(err) => {
                    tracing::error!(path = %path.display(), error = %err, "failed to parse approved words file");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                tracing::error!(path = %path.display(), "permission denied reading approved words file");
                return Err(StoreError::PermissionDenied(path));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to read approved words file");
                Vec::new()
            }
        };
        Ok(Self { path, words })
    }

    /// Overwrite the persisted list with a pretty-printed JSON array.
    /// The approve handler calls this off the request path with a snapshot,
    /// so it takes the list explicitly rather than `&self`.
    pub fn write(path: &Path, words: &[String]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(words)?;
        std::fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        Self::write(&self.path, &self.words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Append words in order, skipping any already present.
    pub fn append(&mut self, words: impl IntoIterator<Item = String>) {
        for word in words {
            if !self.contains(&word) {
                self.words.push(word);
            }
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ApprovedWordStore::load(dir.path().join("absent.json")).unwrap();
        assert!(store.words().is_empty());
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, "not json at all").unwrap();
        let store = ApprovedWordStore::load(&path).unwrap();
        assert!(store.words().is_empty());
    }

    #[test]
    fn test_unreadable_path_loads_empty() {
        // Reading a directory fails with neither NotFound nor PermissionDenied,
        // exercising the logged-and-ignored branch.
        let dir = tempfile::tempdir().unwrap();
        let store = ApprovedWordStore::load(dir.path()).unwrap();
        assert!(store.words().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_load_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, "[\"apple\"]").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores file modes, so there is nothing to assert in that case.
        if std::fs::read_to_string(&path).is_ok() {
            return;
        }

        let result = ApprovedWordStore::load(&path);
        assert!(matches!(result, Err(StoreError::PermissionDenied(_))));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let mut store = ApprovedWordStore::load(&path).unwrap();
        store.append(["apple".to_string(), "berry".to_string()]);
        store.save().unwrap();

        let reloaded = ApprovedWordStore::load(&path).unwrap();
        assert_eq!(reloaded.words(), ["apple", "berry"]);
    }

    #[test]
    fn test_save_pretty_prints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let mut store = ApprovedWordStore::load(&path).unwrap();
        store.append(["apple".to_string()]);
        store.save().unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        assert_eq!(data, "[\n  \"apple\"\n]");
    }

    #[test]
    fn test_append_skips_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ApprovedWordStore::load(dir.path().join("words.json")).unwrap();
        store.append(["apple".to_string()]);
        store.append(["apple".to_string(), "berry".to_string()]);
        assert_eq!(store.words(), ["apple", "berry"]);
        assert!(store.contains("apple"));
        assert!(!store.contains("cider"));
    }
}
