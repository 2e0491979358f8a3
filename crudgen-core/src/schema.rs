//! Owned table metadata, buildable in code or loaded from a JSON schema file

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::meta::{ColumnMeta, TableMeta};
use crate::{Error, Result};

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,

    /// Declared SQL type, e.g. `int4` or `timestamptz`
    #[serde(rename = "type")]
    pub column_type: String,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub auto_increment: bool,
}

impl ColumnDef {
    /// Create a plain (non-key, non-generated) column
    pub fn new(name: &str, column_type: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: column_type.to_string(),
            primary_key: false,
            auto_increment: false,
        }
    }

    /// Mark the column as part of the primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark the column as database-assigned
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }
}

impl ColumnMeta for ColumnDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn column_type(&self) -> &str {
        &self.column_type
    }

    fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }
}

/// Table definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Create a table with no columns
    ///
    /// # Examples
    /// ```
    /// use crudgen_core::{ColumnDef, TableDef};
    ///
    /// let users = TableDef::new("users")
    ///     .column(ColumnDef::new("id", "int4").primary_key().auto_increment())
    ///     .column(ColumnDef::new("email", "text"));
    /// assert_eq!(users.columns.len(), 2);
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Parse and validate a single table definition
    pub fn from_json(json: &str) -> Result<Self> {
        let table: TableDef = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Check the table is loadable: non-empty names, unique column names
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_schema("table name must not be empty"));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.name.trim().is_empty() {
                return Err(Error::invalid_schema(format!(
                    "table '{}' has a column with an empty name",
                    self.name
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "table '{}' declares column '{}' more than once",
                    self.name, column.name
                )));
            }
        }

        Ok(())
    }
}

impl TableMeta for TableDef {
    type Column = ColumnDef;

    fn table_name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }
}

/// A set of tables, as stored in a schema file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

impl Schema {
    /// Parse and validate a schema document
    ///
    /// # Examples
    /// ```
    /// use crudgen_core::Schema;
    ///
    /// let schema = Schema::from_json(r#"{
    ///     "tables": [{
    ///         "name": "users",
    ///         "columns": [
    ///             { "name": "id", "type": "int4", "primary_key": true, "auto_increment": true },
    ///             { "name": "name", "type": "text" }
    ///         ]
    ///     }]
    /// }"#).unwrap();
    ///
    /// assert!(schema.table("users").is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for table in &schema.tables {
            table.validate()?;
            if !seen.insert(table.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "table '{}' is declared more than once",
                    table.name
                )));
            }
        }

        tracing::debug!("loaded schema with {} tables", schema.tables.len());
        Ok(schema)
    }

    /// Look up a table by exact name
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|table| table.name == name)
    }
}
