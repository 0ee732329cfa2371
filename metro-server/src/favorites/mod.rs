//! Flat-file favorites store.
//!
//! A favorite is a named (start, end) station pair. The whole list lives
//! in one JSON file, rewritten on every change; the list is small and a
//! request holds the store for a single read or write, so no locking
//! beyond the filesystem is needed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::StationId;

/// Errors from the favorites store.
#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    /// Reading or writing the favorites file failed
    #[error("favorites file error: {0}")]
    Io(#[from] std::io::Error),

    /// The favorites file is not valid JSON
    #[error("favorites file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No favorite with the given id
    #[error("favorite {0} does not exist")]
    NotFound(u64),
}

/// A saved trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Store-assigned identifier.
    pub id: u64,
    /// User-chosen label.
    pub label: String,
    /// Start station of the saved trip.
    pub start: StationId,
    /// End station of the saved trip.
    pub end: StationId,
}

/// Favorites persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    path: PathBuf,
}

impl FavoriteStore {
    /// Create a store backed by the given file. The file is created on
    /// the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved favorites, in insertion order.
    pub fn list(&self) -> Result<Vec<Favorite>, FavoriteError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save a new favorite and return it with its assigned id.
    pub fn add(
        &self,
        label: impl Into<String>,
        start: StationId,
        end: StationId,
    ) -> Result<Favorite, FavoriteError> {
        let mut favorites = self.list()?;
        let id = favorites.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let favorite = Favorite {
            id,
            label: label.into(),
            start,
            end,
        };
        favorites.push(favorite.clone());
        self.write(&favorites)?;
        Ok(favorite)
    }

    /// Remove a favorite by id.
    pub fn remove(&self, id: u64) -> Result<(), FavoriteError> {
        let mut favorites = self.list()?;
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == before {
            return Err(FavoriteError::NotFound(id));
        }
        self.write(&favorites)
    }

    fn write(&self, favorites: &[Favorite]) -> Result<(), FavoriteError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(favorites)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn station(id: u32) -> StationId {
        StationId::new(id)
    }

    #[test]
    fn empty_store_lists_nothing() {
        let dir = tempdir().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let dir = tempdir().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));

        let home = store.add("to work", station(101), station(203)).unwrap();
        let back = store.add("back home", station(203), station(101)).unwrap();
        assert_eq!(home.id, 1);
        assert_eq!(back.id, 2);

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![home, back]);
    }

    #[test]
    fn remove_deletes_only_the_given_id() {
        let dir = tempdir().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));

        let first = store.add("a", station(1), station(2)).unwrap();
        let second = store.add("b", station(2), station(3)).unwrap();

        store.remove(first.id).unwrap();
        assert_eq!(store.list().unwrap(), vec![second]);
    }

    #[test]
    fn remove_unknown_id_errors() {
        let dir = tempdir().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));
        assert!(matches!(
            store.remove(7),
            Err(FavoriteError::NotFound(7))
        ));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let dir = tempdir().unwrap();
        let store = FavoriteStore::new(dir.path().join("favorites.json"));

        store.add("a", station(1), station(2)).unwrap();
        let second = store.add("b", station(2), station(3)).unwrap();
        store.remove(1).unwrap();

        let third = store.add("c", station(3), station(4)).unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = FavoriteStore::new(dir.path().join("nested").join("favorites.json"));
        store.add("a", station(1), station(2)).unwrap();
        assert!(store.path().exists());
    }
}
