mod manager;
mod persistence;
mod store;

pub use manager::CatalogSession;
pub use persistence::JsonFileStore;
pub use store::{CatalogStore, MemoryStore, StoreKey};
