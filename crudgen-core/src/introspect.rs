//! Table metadata read from a live PostgreSQL catalog
//!
//! Only reads `information_schema`; generated statements are never executed
//! here.

use sqlx::{PgPool, Row};

use crate::schema::{ColumnDef, TableDef};
use crate::{Error, Result};

const COLUMNS_QUERY: &str = r#"
SELECT
    c.column_name::text AS column_name,
    c.udt_name::text AS column_type,
    (c.is_identity = 'YES' OR COALESCE(c.column_default LIKE 'nextval(%', false)) AS is_auto_increment,
    EXISTS (
        SELECT 1
        FROM information_schema.table_constraints tc
        JOIN information_schema.key_column_usage kcu
          ON tc.constraint_name = kcu.constraint_name
         AND tc.table_schema = kcu.table_schema
         AND tc.table_name = kcu.table_name
        WHERE tc.constraint_type = 'PRIMARY KEY'
          AND tc.table_schema = c.table_schema
          AND tc.table_name = c.table_name
          AND kcu.column_name = c.column_name
    ) AS is_primary_key
FROM information_schema.columns c
WHERE c.table_schema = $1 AND c.table_name = $2
ORDER BY c.ordinal_position
"#;

/// Build a [`TableDef`] for `schema.table` from the database catalog
///
/// Column types are PostgreSQL `udt_name`s (`int4`, `timestamptz`, ...), which
/// are valid in the array casts emitted by select-multi. Identity columns and
/// columns defaulting to `nextval(...)` count as auto-increment.
pub async fn introspect_table(pool: &PgPool, schema: &str, table: &str) -> Result<TableDef> {
    tracing::debug!("introspecting {}.{}", schema, table);

    let rows = sqlx::query(COLUMNS_QUERY)
        .bind(schema)
        .bind(table)
        .fetch_all(pool)
        .await?;

    if rows.is_empty() {
        return Err(Error::table_not_found(format!("{}.{}", schema, table)));
    }

    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        columns.push(ColumnDef {
            name: row.try_get("column_name")?,
            column_type: row.try_get("column_type")?,
            primary_key: row.try_get("is_primary_key")?,
            auto_increment: row.try_get("is_auto_increment")?,
        });
    }

    tracing::debug!("found {} columns in {}.{}", columns.len(), schema, table);
    Ok(TableDef {
        name: table.to_string(),
        columns,
    })
}
