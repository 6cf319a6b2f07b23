//! Key-value snapshot storage.

mod model;
mod repository;

pub use model::LocalStorageDB;
pub use repository::LocalStorageRepository;
