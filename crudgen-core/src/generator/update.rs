//! UPDATE statement generation

use super::common::{finish, placeholder, quote_table, require_primary_key};
use super::Statement;
use crate::meta::{ColumnMeta, TableMeta};
use crate::Result;

/// Generate an `UPDATE` setting every non-key column, keyed on the primary key
///
/// SET placeholders are `$1..$k` (or `@<column>`). WHERE placeholders are
/// `@where_<column>` when named. Positional WHERE numbering adds the key
/// counter to a SET counter that keeps advancing, so the j-th key receives
/// `$<k + 2j>`. Existing callers bind against that numbering; keep it.
pub fn generate_update_sql<T>(table: &T, named_params: bool) -> Result<String>
where
    T: TableMeta + ?Sized,
{
    require_primary_key(table, Statement::Update)?;

    let mut sql = String::new();
    sql.push_str("UPDATE ");
    sql.push_str(&quote_table(table.table_name()));
    sql.push_str(" SET");

    let mut set_col = 1;
    for col in table.columns().iter().filter(|col| !col.is_primary_key()) {
        if set_col != 1 {
            sql.push(',');
        }

        let param = placeholder(named_params, set_col, || col.name().to_string());
        sql.push_str(&format!(" {} = {}", col.name(), param));
        set_col += 1;
    }

    sql.push_str(" WHERE");
    let mut key = 1;
    for col in table.columns().iter().filter(|col| col.is_primary_key()) {
        if key > 1 {
            sql.push_str(" AND");
        }

        let param = placeholder(named_params, key + set_col, || {
            format!("where_{}", col.name())
        });
        sql.push_str(&format!(" {} = {}", col.name(), param));
        set_col += 1;
        key += 1;
    }

    finish(table.table_name(), Statement::Update, sql)
}
