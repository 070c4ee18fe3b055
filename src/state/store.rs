use std::collections::HashMap;
use std::fmt;

use crate::error::{PlannerError, Result};
use crate::models::FoodCatalog;

/// Identifies which stored catalog a session reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Catalog owned by a signed-in user.
    User(String),

    /// The single slot used when there is no user identity.
    Local,
}

impl StoreKey {
    /// Key for `user`, or [`StoreKey::Local`] when absent.
    ///
    /// User ids end up in file names, so only ASCII letters, digits, `-` and
    /// `_` are accepted.
    pub fn for_user(user: Option<&str>) -> Result<Self> {
        let Some(user) = user.map(str::trim) else {
            return Ok(StoreKey::Local);
        };

        validate_user_id(user)?;
        Ok(StoreKey::User(user.to_string()))
    }
}

/// Reject user ids that are not safe to use as a file name.
pub(crate) fn validate_user_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(PlannerError::InvalidInput(format!(
            "user id '{}' may only contain letters, digits, '-' and '_'",
            id
        )));
    }
    Ok(())
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::User(id) => write!(f, "user {}", id),
            StoreKey::Local => f.write_str("local catalog"),
        }
    }
}

/// Where catalogs are kept between runs.
///
/// Every save writes the whole snapshot; the last write for a key wins.
pub trait CatalogStore {
    /// Stored catalog for `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &StoreKey) -> Result<Option<FoodCatalog>>;

    /// Replace the stored catalog for `key`.
    fn save(&mut self, key: &StoreKey, catalog: &FoodCatalog) -> Result<()>;
}

/// Store kept in memory, mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<StoreKey, FoodCatalog>,
    reject_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with a persistence error.
    pub fn reject_saves(&mut self, reject: bool) {
        self.reject_saves = reject;
    }

    pub fn get(&self, key: &StoreKey) -> Option<&FoodCatalog> {
        self.records.get(key)
    }

    pub fn insert(&mut self, key: StoreKey, catalog: FoodCatalog) {
        self.records.insert(key, catalog);
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self, key: &StoreKey) -> Result<Option<FoodCatalog>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &StoreKey, catalog: &FoodCatalog) -> Result<()> {
        if self.reject_saves {
            return Err(PlannerError::Persistence {
                key: key.to_string(),
                reason: "store is rejecting writes".to_string(),
            });
        }
        self.records.insert(key.clone(), catalog.clone());
        Ok(())
    }
}
