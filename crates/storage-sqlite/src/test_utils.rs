//! Temporary databases for repository tests.

use tempfile::TempDir;

use crate::db::{create_pool, get_db_path, init, run_migrations, spawn_writer};
use crate::local_storage::LocalStorageRepository;

/// Migrated database in a fresh temp dir. Keep the `TempDir` alive for the
/// duration of the test. Must be called inside a Tokio runtime.
pub fn setup_storage() -> (TempDir, LocalStorageRepository) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = init(&get_db_path(dir.path().to_str().unwrap())).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer(pool.clone());
    (dir, LocalStorageRepository::new(pool, writer))
}
