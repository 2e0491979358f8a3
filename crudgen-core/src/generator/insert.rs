//! INSERT statement generation

use super::common::{finish, placeholder, quote_table, require_primary_key};
use super::Statement;
use crate::meta::{ColumnMeta, TableMeta};
use crate::Result;

/// Generate an `INSERT` covering every non auto-increment column
///
/// Primary key columns that are not auto-increment get the literal
/// `default`. Positional placeholders use the column's index in the full
/// column list, so skipped columns leave gaps in the numbering.
///
/// # Examples
/// ```
/// use crudgen_core::{generate_insert_sql, table, ColumnDef};
///
/// let users = table("users")
///     .column(ColumnDef::new("id", "int").primary_key().auto_increment())
///     .column(ColumnDef::new("name", "text"))
///     .column(ColumnDef::new("deleted_at", "timestamptz"));
///
/// let sql = generate_insert_sql(&users, false).unwrap();
/// assert_eq!(sql, r#"INSERT INTO "users" ( name, deleted_at) values ( $2, $3 )"#);
/// ```
pub fn generate_insert_sql<T>(table: &T, named_params: bool) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::Insert)?;

    let insertable: Vec<(usize, &T::Column)> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, col)| !col.is_auto_increment())
        .collect();

    let columns: Vec<String> = insertable
        .iter()
        .map(|(_, col)| format!(" {}", col.name()))
        .collect();

    let values: Vec<String> = insertable
        .iter()
        .map(|(i, col)| {
            if col.is_primary_key() {
                "default".to_string()
            } else {
                placeholder(named_params, i + 1, || col.name().to_string())
            }
        })
        .collect();

    let mut sql = String::new();

    // INSERT INTO clause
    sql.push_str("INSERT INTO ");
    sql.push_str(&quote_table(table.table_name()));

    // Columns
    sql.push_str(" (");
    sql.push_str(&columns.join(","));
    sql.push(')');

    // VALUES clause
    sql.push_str(" values ( ");
    sql.push_str(&values.join(", "));
    sql.push_str(" )");

    finish(table.table_name(), Statement::Insert, sql)
}
