//! crudgen core - CRUD SQL generation from table metadata
//!
//! Describe a table through [`TableMeta`] (or build a [`TableDef`]) and get
//! back literal SQL for insert, update, hard/soft delete and the select
//! variants, with either positional (`$1`) or named (`@name`) placeholders.
//!
//! ```
//! use crudgen_core::{generate_select_one_sql, generate_soft_delete_sql, table, ColumnDef};
//!
//! let users = table("users")
//!     .column(ColumnDef::new("id", "int").primary_key().auto_increment())
//!     .column(ColumnDef::new("name", "text"))
//!     .column(ColumnDef::new("deleted_at", "timestamptz"));
//!
//! assert_eq!(
//!     generate_select_one_sql(&users, false).unwrap(),
//!     r#"SELECT * FROM "users" WHERE  id = $1"#
//! );
//! assert_eq!(
//!     generate_soft_delete_sql(&users, false).unwrap(),
//!     r#"UPDATE "users" set deleted_at = $1 WHERE id = $2"#
//! );
//! ```

pub mod error;
pub mod generator;
#[cfg(feature = "postgres")]
pub mod introspect;
pub mod keys;
pub mod meta;
pub mod schema;

// Re-export main types
pub use error::{Error, Result};
pub use generator::{
    generate_all, generate_hard_delete_sql, generate_insert_sql, generate_select_all_sql,
    generate_select_multi_sql, generate_select_one_sql, generate_soft_delete_sql,
    generate_update_sql, CrudStatements, Statement,
};
pub use keys::{non_primary_key_names, primary_key_count, primary_key_names};
pub use meta::{ColumnMeta, TableMeta};
pub use schema::{ColumnDef, Schema, TableDef};

/// Start describing a table with the given name
pub fn table(name: &str) -> TableDef {
    TableDef::new(name)
}
