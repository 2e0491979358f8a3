//! Primary key inspection helpers

use crate::meta::{ColumnMeta, TableMeta};

/// Number of primary key columns in the table
pub fn primary_key_count<T>(table: &T) -> usize
where
    T: TableMeta + ?Sized,
{
    table
        .columns()
        .iter()
        .filter(|col| col.is_primary_key())
        .count()
}

/// Names of the primary key columns, in column order
pub fn primary_key_names<T>(table: &T) -> Vec<String>
where
    T: TableMeta + ?Sized,
{
    table
        .columns()
        .iter()
        .filter(|col| col.is_primary_key())
        .map(|col| col.name().to_string())
        .collect()
}

/// Names of the non primary key columns, in column order
pub fn non_primary_key_names<T>(table: &T) -> Vec<String>
where
    T: TableMeta + ?Sized,
{
    table
        .columns()
        .iter()
        .filter(|col| !col.is_primary_key())
        .map(|col| col.name().to_string())
        .collect()
}
