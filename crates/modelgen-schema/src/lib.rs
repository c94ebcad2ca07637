//! Normalized database schema model for modelgen.
//!
//! This crate contains the schema types that are shared between `modelgen`
//! (metadata extraction and source generation) and its consumers, plus the
//! pure identifier-casing and type-mapping transforms used during
//! generation.
//!
//! A [`DatabaseSchema`] is built once per extraction and never mutated
//! afterwards; generation reads it through a shared reference.

use serde::Serialize;

mod names;
pub use names::{to_camel_case, to_pascal_case};

mod types;
pub use types::{FieldType, map_type};

/// A complete database schema, as reported by introspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseSchema {
    /// Database name, derived from the connection URL's trailing path
    /// segment.
    pub name: String,
    /// Tables in introspection return order. The order is stable but not
    /// otherwise meaningful.
    pub tables: Vec<Table>,
}

impl DatabaseSchema {
    /// Get a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// A database table definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Columns in ordinal order
    pub columns: Vec<Column>,
    /// Primary-key column name, if the table has one.
    ///
    /// Composite primary keys are truncated to their first reported
    /// column; see the extraction documentation.
    pub primary_key_column: Option<String>,
    /// Imported foreign keys, verbatim from introspection
    pub foreign_keys: Vec<ForeignKey>,
    /// Indexes
    pub indexes: Vec<Index>,
}

impl Table {
    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A database column definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Engine-native type name, verbatim from introspection
    pub engine_type_name: String,
    /// Column size (character length or numeric precision)
    pub size: i32,
    /// Whether the column allows NULL
    pub nullable: bool,
    /// Whether this column is the table's primary key
    pub is_primary_key: bool,
    /// Whether the column value is generated by the engine
    pub is_auto_increment: bool,
    /// Default value expression, verbatim and unparsed
    pub default_value: Option<String>,
}

/// An imported foreign-key constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    /// Constraint name
    pub constraint_name: String,
    /// Referencing column in this table
    pub column_name: String,
    /// Referenced table
    pub referenced_table: String,
    /// Referenced column
    pub referenced_column: String,
}

/// A database index.
///
/// Raw introspection reports one row per index column; rows sharing an
/// index name are grouped into a single `Index`, accumulating column names
/// in encounter order. Rows with a null index name are dropped before an
/// `Index` is ever materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Index {
    /// Index name
    pub name: String,
    /// Whether this is a unique index (negation of the raw "non-unique"
    /// flag, fixed from the first row seen for this index name)
    pub unique: bool,
    /// Column names in introspection row order
    pub column_names: Vec<String>,
}

#[cfg(test)]
mod tests;
