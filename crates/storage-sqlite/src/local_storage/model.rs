//! Database model for stored snapshots.

use diesel::prelude::*;

/// One key of the `local_storage` table. Values are JSON text.
#[derive(Queryable, Insertable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::local_storage)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LocalStorageDB {
    pub storage_key: String,
    pub storage_value: String,
}
