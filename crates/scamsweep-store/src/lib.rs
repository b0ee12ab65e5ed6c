pub mod db;
pub mod error;
pub mod query;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub use query::SourceRow;

/// Read-only handle on a source SQLite database.
pub struct SourceDb {
    conn: Connection,
}

impl SourceDb {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open_read_only(path)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn read_rows(
        &self,
        table: &str,
        number_field: &str,
        type_field: &str,
    ) -> Result<Vec<SourceRow>> {
        query::select_number_and_type(&self.conn, table, number_field, type_field)
    }
}
