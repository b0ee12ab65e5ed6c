use crate::error::{Result, StoreError};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::debug;

/// One row of a source table. Either column may be NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub number: Option<String>,
    pub label: Option<String>,
}

pub fn select_number_and_type(
    conn: &Connection,
    table: &str,
    number_field: &str,
    type_field: &str,
) -> Result<Vec<SourceRow>> {
    let sql = format!(
        "SELECT {}, {} FROM {};",
        quote_identifier(number_field)?,
        quote_identifier(type_field)?,
        quote_identifier(table)?
    );
    debug!(%sql, "reading source table");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(SourceRow {
            number: value_to_string(row.get_ref(0)?),
            label: value_to_string(row.get_ref(1)?),
        });
    }
    Ok(out)
}

/// Accepts plain identifiers only and wraps them in double quotes.
pub fn quote_identifier(raw: &str) -> Result<String> {
    let mut chars = raw.chars();
    let valid_start = chars
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_');
    if !valid_start || !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
        return Err(StoreError::InvalidIdentifier(raw.to_string()));
    }
    Ok(format!("\"{raw}\""))
}

fn value_to_string(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
