//! DELETE statement generation: hard delete and soft delete

use super::common::{finish, placeholder, quote_table, require_primary_key};
use super::Statement;
use crate::meta::{ColumnMeta, TableMeta};
use crate::{Error, Result};

/// Soft delete marker columns. Exact, case-sensitive match.
fn is_deleted_at_column(name: &str) -> bool {
    matches!(name, "deleted_at" | "DeletedAt")
}

/// Generate a `DELETE` keyed on every primary key column
///
/// Positional placeholders count primary keys from `$1`; named placeholders
/// are `@<column>_<n>`.
///
/// # Examples
/// ```
/// use crudgen_core::{generate_hard_delete_sql, table, ColumnDef};
///
/// let t = table("t")
///     .column(ColumnDef::new("a", "int4").primary_key())
///     .column(ColumnDef::new("b", "int4").primary_key());
///
/// let sql = generate_hard_delete_sql(&t, true).unwrap();
/// assert_eq!(sql, r#"DELETE FROM "t" where a = @a_1 AND b = @b_2"#);
/// ```
pub fn generate_hard_delete_sql<T>(table: &T, named_params: bool) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::HardDelete)?;

    let mut sql = String::new();
    sql.push_str("DELETE FROM ");
    sql.push_str(&quote_table(table.table_name()));
    sql.push_str(" where");

    let mut key = 1;
    for col in table.columns().iter().filter(|col| col.is_primary_key()) {
        if key > 1 {
            sql.push_str(" AND");
        }

        let param = placeholder(named_params, key, || format!("{}_{}", col.name(), key));
        sql.push_str(&format!(" {} = {}", col.name(), param));
        key += 1;
    }

    finish(table.table_name(), Statement::HardDelete, sql)
}

/// Generate an `UPDATE` that stamps the `deleted_at`/`DeletedAt` column
///
/// The SET and WHERE clauses share one positional counter, so the first key
/// placeholder follows the last SET placeholder. Named SET placeholders are
/// `@upd_<column>_<n>`; named WHERE placeholders are plain `@<column>`.
pub fn generate_soft_delete_sql<T>(table: &T, named_params: bool) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::SoftDelete)?;

    let mut sql = String::new();
    sql.push_str("UPDATE ");
    sql.push_str(&quote_table(table.table_name()));
    sql.push_str(" set");

    let mut counter = 1;
    for col in table.columns().iter().filter(|col| is_deleted_at_column(col.name())) {
        if counter != 1 {
            sql.push(',');
        }

        let param = placeholder(named_params, counter, || {
            format!("upd_{}_{}", col.name(), counter)
        });
        sql.push_str(&format!(" {} = {}", col.name(), param));
        counter += 1;
    }

    if counter == 1 {
        tracing::debug!(
            "refusing to generate {} for {}: no deleted at column",
            Statement::SoftDelete,
            table.table_name()
        );
        return Err(Error::no_deleted_at_column(table.table_name()));
    }

    sql.push_str(" WHERE");
    let mut first = true;
    for col in table.columns().iter().filter(|col| col.is_primary_key()) {
        if !first {
            sql.push_str(" AND");
        }

        let param = placeholder(named_params, counter, || col.name().to_string());
        sql.push_str(&format!(" {} = {}", col.name(), param));
        counter += 1;
        first = false;
    }

    finish(table.table_name(), Statement::SoftDelete, sql)
}
