//! CRUD statement generators
//!
//! Each generator is a pure, single pass over the table's ordered columns.
//! Generators never share traversal state; each one walks the columns itself.

mod common;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::meta::TableMeta;
use crate::{Error, Result};

pub use delete::{generate_hard_delete_sql, generate_soft_delete_sql};
pub use insert::generate_insert_sql;
pub use select::{generate_select_all_sql, generate_select_multi_sql, generate_select_one_sql};
pub use update::generate_update_sql;

/// The statement kinds this crate can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Insert,
    Update,
    HardDelete,
    SoftDelete,
    SelectOne,
    SelectMulti,
    SelectAll,
}

impl Statement {
    pub const ALL: [Statement; 7] = [
        Statement::Insert,
        Statement::Update,
        Statement::HardDelete,
        Statement::SoftDelete,
        Statement::SelectOne,
        Statement::SelectMulti,
        Statement::SelectAll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Statement::Insert => "insert",
            Statement::Update => "update",
            Statement::HardDelete => "hard_delete",
            Statement::SoftDelete => "soft_delete",
            Statement::SelectOne => "select_one",
            Statement::SelectMulti => "select_multi",
            Statement::SelectAll => "select_all",
        }
    }

    /// Generate this statement for the table
    ///
    /// `named_params` is ignored by [`Statement::SelectAll`], which has no
    /// placeholders.
    ///
    /// # Examples
    /// ```
    /// use crudgen_core::{table, ColumnDef, Statement};
    ///
    /// let users = table("users")
    ///     .column(ColumnDef::new("id", "int4").primary_key().auto_increment());
    ///
    /// let sql = Statement::SelectAll.generate(&users, false).unwrap();
    /// assert_eq!(sql, r#"SELECT * FROM "users""#);
    /// ```
    pub fn generate<T>(self, table: &T, named_params: bool) -> Result<String>
    where
        T: TableMeta + ?Sized,
    {
        match self {
            Statement::Insert => generate_insert_sql(table, named_params),
            Statement::Update => generate_update_sql(table, named_params),
            Statement::HardDelete => generate_hard_delete_sql(table, named_params),
            Statement::SoftDelete => generate_soft_delete_sql(table, named_params),
            Statement::SelectOne => generate_select_one_sql(table, named_params),
            Statement::SelectMulti => generate_select_multi_sql(table, named_params),
            Statement::SelectAll => generate_select_all_sql(table),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every statement for one table, ready to serialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrudStatements {
    pub table: String,
    pub insert: String,
    pub update: String,
    pub hard_delete: String,
    /// `None` when the table has no `deleted_at`/`DeletedAt` column
    pub soft_delete: Option<String>,
    pub select_one: String,
    pub select_multi: String,
    pub select_all: String,
}

/// Generate the full statement set for a table
///
/// A keyless table is an error. A table without a deleted-at column just
/// has no soft delete.
pub fn generate_all<T>(table: &T, named_params: bool) -> Result<CrudStatements>
where
    T: TableMeta + ?Sized,
{
    let soft_delete = match generate_soft_delete_sql(table, named_params) {
        Ok(sql) => Some(sql),
        Err(Error::NoDeletedAtColumn { .. }) => None,
        Err(e) => return Err(e),
    };

    Ok(CrudStatements {
        table: table.table_name().to_string(),
        insert: generate_insert_sql(table, named_params)?,
        update: generate_update_sql(table, named_params)?,
        hard_delete: generate_hard_delete_sql(table, named_params)?,
        soft_delete,
        select_one: generate_select_one_sql(table, named_params)?,
        select_multi: generate_select_multi_sql(table, named_params)?,
        select_all: generate_select_all_sql(table)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, TableDef};

    fn users() -> TableDef {
        TableDef::new("users")
            .column(ColumnDef::new("id", "int").primary_key().auto_increment())
            .column(ColumnDef::new("name", "text"))
            .column(ColumnDef::new("deleted_at", "timestamptz"))
    }

    fn placeholders(sql: &str) -> (bool, bool) {
        let named = sql.contains('@');
        let positional = sql
            .match_indices('$')
            .any(|(i, _)| sql[i + 1..].starts_with(|c: char| c.is_ascii_digit()));
        (named, positional)
    }

    #[test]
    fn test_statement_names() {
        assert_eq!(Statement::HardDelete.to_string(), "hard_delete");
        assert_eq!(
            serde_json::to_string(&Statement::SelectMulti).unwrap(),
            "\"select_multi\""
        );
        let parsed: Statement = serde_json::from_str("\"soft_delete\"").unwrap();
        assert_eq!(parsed, Statement::SoftDelete);
    }

    #[test]
    fn test_generate_dispatch_matches_functions() {
        let table = users();
        assert_eq!(
            Statement::Update.generate(&table, false).unwrap(),
            generate_update_sql(&table, false).unwrap()
        );
        assert_eq!(
            Statement::SelectAll.generate(&table, true).unwrap(),
            generate_select_all_sql(&table).unwrap()
        );
    }

    #[test]
    fn test_every_statement_fails_without_primary_key() {
        let table = TableDef::new("events")
            .column(ColumnDef::new("payload", "jsonb"))
            .column(ColumnDef::new("deleted_at", "timestamptz"));

        for statement in Statement::ALL {
            for named in [false, true] {
                let err = statement.generate(&table, named).unwrap_err();
                assert!(
                    matches!(err, Error::NoPrimaryKey { .. }),
                    "{} should fail",
                    statement
                );
            }
        }
    }

    #[test]
    fn test_placeholder_styles_never_mix() {
        let table = users();
        for statement in Statement::ALL {
            let named = statement.generate(&table, true).unwrap();
            let (has_named, has_positional) = placeholders(&named);
            assert!(!has_positional, "{}: {}", statement, named);
            assert_eq!(has_named, statement != Statement::SelectAll);

            let positional = statement.generate(&table, false).unwrap();
            let (has_named, has_positional) = placeholders(&positional);
            assert!(!has_named, "{}: {}", statement, positional);
            assert_eq!(has_positional, statement != Statement::SelectAll);
        }
    }

    #[test]
    fn test_generate_all() {
        let all = generate_all(&users(), false).unwrap();
        assert_eq!(all.table, "users");
        assert_eq!(
            all.insert,
            r#"INSERT INTO "users" ( name, deleted_at) values ( $2, $3 )"#
        );
        assert_eq!(
            all.soft_delete.as_deref(),
            Some(r#"UPDATE "users" set deleted_at = $1 WHERE id = $2"#)
        );
        assert_eq!(all.select_one, r#"SELECT * FROM "users" WHERE  id = $1"#);
        assert_eq!(all.select_all, r#"SELECT * FROM "users""#);
    }

    #[test]
    fn test_generate_all_without_deleted_at() {
        let table = TableDef::new("tags")
            .column(ColumnDef::new("id", "int4").primary_key())
            .column(ColumnDef::new("label", "text"));
        let all = generate_all(&table, true).unwrap();
        assert!(all.soft_delete.is_none());
        assert_eq!(all.hard_delete, r#"DELETE FROM "tags" where id = @id_1"#);

        let json = serde_json::to_value(&all).unwrap();
        assert!(json["soft_delete"].is_null());
    }

    #[test]
    fn test_generate_all_without_primary_key() {
        let table = TableDef::new("events").column(ColumnDef::new("payload", "jsonb"));
        assert!(matches!(
            generate_all(&table, false),
            Err(Error::NoPrimaryKey { .. })
        ));
    }
}
