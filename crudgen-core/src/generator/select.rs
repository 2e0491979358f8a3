//! SELECT statement generation

use super::common::{finish, placeholder, quote_table, require_primary_key};
use super::Statement;
use crate::meta::{ColumnMeta, TableMeta};
use crate::Result;

/// Generate a `SELECT *` for a single row, keyed on the primary key
///
/// Placeholders use the key column's index in the full column list:
/// `$<i+1>` or `@where_<column>_<i+1>`.
pub fn generate_select_one_sql<T>(table: &T, named_params: bool) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::SelectOne)?;

    let conditions = key_conditions(table, named_params, |column, param, _| {
        format!(" {} = {}", column, param)
    });

    let sql = format!(
        "SELECT * FROM {} WHERE {}",
        quote_table(table.table_name()),
        conditions.join(" AND")
    );
    finish(table.table_name(), Statement::SelectOne, sql)
}

/// Generate a `SELECT *` matching any of a set of keys
///
/// Each key is compared with `= ANY(<param>::<type>[])`, so the caller binds
/// one array per key column.
pub fn generate_select_multi_sql<T>(table: &T, named_params: bool) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::SelectMulti)?;

    let conditions = key_conditions(table, named_params, |column, param, column_type| {
        format!(" {} = ANY({}::{}[])", column, param, column_type)
    });

    let sql = format!(
        "SELECT * FROM {} WHERE {}",
        quote_table(table.table_name()),
        conditions.join(" AND")
    );
    finish(table.table_name(), Statement::SelectMulti, sql)
}

/// Generate an unfiltered `SELECT *`
///
/// Still fails on a keyless table, like every other statement.
pub fn generate_select_all_sql<T>(table: &T) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::SelectAll)?;

    let sql = format!("SELECT * FROM {}", quote_table(table.table_name()));
    finish(table.table_name(), Statement::SelectAll, sql)
}

/// One rendered comparison per primary key column, in column order
fn key_conditions<T, F>(table: &T, named_params: bool, render: F) -> Vec<String>
where
    T: TableMeta + ?Sized,
    F: Fn(&str, &str, &str) -> String,
{
    table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, col)| col.is_primary_key())
        .map(|(i, col)| {
            let param = placeholder(named_params, i + 1, || {
                format!("where_{}_{}", col.name(), i + 1)
            });
            render(col.name(), &param, col.column_type())
        })
        .collect()
}
