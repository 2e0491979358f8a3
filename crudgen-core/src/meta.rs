//! Read-only metadata contracts consumed by the generators
//!
//! Anything that can describe a table (a parsed schema file, a live database
//! catalog, hand-built fixtures) implements these two traits. Generators only
//! ever read through them.

/// A single column as seen by the generators
pub trait ColumnMeta {
    /// Column name, emitted unquoted
    fn name(&self) -> &str;

    /// Declared type, emitted verbatim in array casts
    fn column_type(&self) -> &str;

    /// Whether the column is part of the primary key
    fn is_primary_key(&self) -> bool;

    /// Whether the database assigns the value on insert
    fn is_auto_increment(&self) -> bool;
}

/// A table as seen by the generators
pub trait TableMeta {
    /// The column type exposed by this table
    type Column: ColumnMeta;

    /// Table name, emitted double-quoted
    fn table_name(&self) -> &str;

    /// Columns in declaration order.
    ///
    /// Order is significant: it drives clause order and positional
    /// placeholder numbering.
    fn columns(&self) -> &[Self::Column];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_hard_delete_sql, generate_select_multi_sql};

    // A borrowed, static view, as generated code might expose.
    struct StaticColumn {
        name: &'static str,
        sql_type: &'static str,
        key: bool,
    }

    impl ColumnMeta for StaticColumn {
        fn name(&self) -> &str {
            self.name
        }

        fn column_type(&self) -> &str {
            self.sql_type
        }

        fn is_primary_key(&self) -> bool {
            self.key
        }

        fn is_auto_increment(&self) -> bool {
            false
        }
    }

    struct StaticTable(&'static [StaticColumn]);

    impl TableMeta for StaticTable {
        type Column = StaticColumn;

        fn table_name(&self) -> &str {
            "sessions"
        }

        fn columns(&self) -> &[StaticColumn] {
            self.0
        }
    }

    static SESSION_COLUMNS: [StaticColumn; 2] = [
        StaticColumn { name: "token", sql_type: "uuid", key: true },
        StaticColumn { name: "expires_at", sql_type: "timestamptz", key: false },
    ];

    #[test]
    fn test_custom_metadata_source() {
        let table = StaticTable(&SESSION_COLUMNS);
        assert_eq!(
            generate_hard_delete_sql(&table, false).unwrap(),
            r#"DELETE FROM "sessions" where token = $1"#
        );
        assert_eq!(
            generate_select_multi_sql(&table, true).unwrap(),
            r#"SELECT * FROM "sessions" WHERE  token = ANY(@where_token_1::uuid[])"#
        );
    }
}
