//! Helpers shared across all statement generators

use super::Statement;
use crate::keys::primary_key_count;
use crate::meta::TableMeta;
use crate::{Error, Result};

/// Fail unless the table has at least one primary key column.
///
/// Every statement kind checks this, select-all included.
pub(crate) fn require_primary_key<T>(table: &T, statement: Statement) -> Result<usize>
where
    T: TableMeta + ?Sized,
{
    let count = primary_key_count(table);
    if count == 0 {
        tracing::debug!(
            "refusing to generate {} for {}: no primary key",
            statement,
            table.table_name()
        );
        return Err(Error::no_primary_key(table.table_name()));
    }
    Ok(count)
}

/// Render a bind placeholder: `$<position>` or `@<name>`
///
/// The named form is built lazily since positional mode never needs it.
pub(crate) fn placeholder<F>(named_params: bool, position: usize, name: F) -> String
where
    F: FnOnce() -> String,
{
    if named_params {
        format!("@{}", name())
    } else {
        format!("${}", position)
    }
}

/// Table names are always double-quoted, column names never are
pub(crate) fn quote_table(name: &str) -> String {
    format!("\"{}\"", name)
}

pub(crate) fn finish(table_name: &str, statement: Statement, sql: String) -> Result<String> {
    tracing::debug!("generated {} for {}: {}", statement, table_name, sql);
    Ok(sql)
}
