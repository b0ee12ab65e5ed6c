use crate::error::{Result, StoreError};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Source databases belong to other tools; never write to them.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(StoreError::MissingDatabase(path.to_path_buf()));
    }
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)?;
    conn.pragma_update(None, "busy_timeout", 2000)?;
    Ok(conn)
}
