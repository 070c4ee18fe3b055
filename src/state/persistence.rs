use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::FoodCatalog;
use crate::state::store::{CatalogStore, StoreKey, validate_user_id};

/// Catalogs stored as pretty-printed JSON files under one directory.
///
/// The local slot lives in `foods.json`; user catalogs in `profiles/<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. User ids that could escape `dir` are rejected.
    pub fn path_for(&self, key: &StoreKey) -> Result<PathBuf> {
        match key {
            StoreKey::Local => Ok(self.dir.join("foods.json")),
            StoreKey::User(id) => {
                validate_user_id(id)?;
                Ok(self.dir.join("profiles").join(format!("{}.json", id)))
            }
        }
    }

    /// Write to a sibling temp file, then rename it over `path`, so readers
    /// never see a half-written record.
    fn write(&self, path: &Path, catalog: &FoodCatalog) -> Result<()> {
        let parent = path.parent().unwrap_or(&self.dir);
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(catalog)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self, key: &StoreKey) -> Result<Option<FoodCatalog>> {
        let path = self.path_for(key)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored catalog");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let catalog = serde_json::from_str(&content)?;
        Ok(Some(catalog))
    }

    fn save(&mut self, key: &StoreKey, catalog: &FoodCatalog) -> Result<()> {
        let path = self.path_for(key)?;
        self.write(&path, catalog)
            .map_err(|e| PlannerError::Persistence {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), entries = catalog.len(), "catalog written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        let key = StoreKey::User("wanjiru".to_string());

        assert!(store.load(&key).unwrap().is_none());

        let catalog = FoodCatalog::default().with_food(Category::Lunch, "Matoke");
        store.save(&key, &catalog).unwrap();

        assert!(dir.path().join("profiles/wanjiru.json").exists());
        assert_eq!(store.load(&key).unwrap(), Some(catalog));
        // other keys are untouched
        assert!(store.load(&StoreKey::Local).unwrap().is_none());
    }

    #[test]
    fn test_loads_record_without_some_categories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foods.json"), r#"{"lunch": ["Pilau"]}"#).unwrap();

        let store = JsonFileStore::new(dir.path());
        let catalog = store.load(&StoreKey::Local).unwrap().unwrap();
        assert_eq!(catalog.foods(Category::Lunch), ["Pilau"]);
        assert!(catalog.foods(Category::Fruit).is_empty());
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foods.json"), "not json").unwrap();

        let store = JsonFileStore::new(dir.path());
        assert!(matches!(store.load(&StoreKey::Local), Err(PlannerError::Json(_))));
    }

    #[test]
    fn test_save_failure_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        // a regular file where the profiles directory should be
        fs::write(dir.path().join("profiles"), "").unwrap();

        let mut store = JsonFileStore::new(dir.path());
        let err = store
            .save(&StoreKey::User("amina".to_string()), &FoodCatalog::default())
            .unwrap_err();
        assert!(matches!(err, PlannerError::Persistence { ref key, .. } if key == "user amina"));
    }

    #[test]
    fn test_user_id_cannot_escape_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("data"));
        let key = StoreKey::User("../escaped".to_string());

        assert!(matches!(store.path_for(&key), Err(PlannerError::InvalidInput(_))));
        assert!(matches!(store.load(&key), Err(PlannerError::InvalidInput(_))));
        assert!(store.save(&key, &FoodCatalog::default()).is_err());
        assert!(!dir.path().join("escaped.json").exists());
    }

    #[test]
    fn test_save_replaces_record_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        fs::write(dir.path().join("foods.json"), "not json").unwrap();

        let catalog = FoodCatalog::default().with_food(Category::Fruit, "Guava");
        store.save(&StoreKey::Local, &catalog).unwrap();

        assert_eq!(store.load(&StoreKey::Local).unwrap(), Some(catalog));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
