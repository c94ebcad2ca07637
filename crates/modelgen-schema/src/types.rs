//! Engine type name to generated field type mapping.

use serde::Serialize;

/// The generated-field type for a database column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// Any integer width
    Integer,
    /// Floating point or fixed-precision decimal
    Float,
    /// BOOLEAN or BIT
    Boolean,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time
    Timestamp,
    /// Binary blob
    Blob,
    /// Generic text; also the fallback for unrecognized type names
    Text,
}

impl FieldType {
    /// The Rust type name emitted for this field type.
    ///
    /// The date/time names are the `jiff` civil types; generated files
    /// `use` them when referenced.
    pub fn rust_type(&self) -> &'static str {
        match self {
            FieldType::Integer => "i64",
            FieldType::Float => "f64",
            FieldType::Boolean => "bool",
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::Timestamp => "Timestamp",
            FieldType::Blob => "Vec<u8>",
            FieldType::Text => "String",
        }
    }
}

/// Map an engine-native type name to a generated field type.
///
/// The name is matched case-insensitively by substring against an ordered
/// rule list; the first matching rule wins. The order is load-bearing, not
/// cosmetic: a name containing both `INT` and another token must resolve
/// as an integer, and `TIMESTAMP` is distinguished from `TIME` only after
/// the independent `DATE` rule has been tried and failed. Keep this a
/// sequential chain; an unordered dispatch table would change the
/// semantics.
pub fn map_type(engine_type_name: &str) -> FieldType {
    let name = engine_type_name.to_ascii_uppercase();

    if name.contains("INT") {
        FieldType::Integer
    } else if name.contains("FLOAT") || name.contains("DOUBLE") || name.contains("DECIMAL") {
        FieldType::Float
    } else if name.contains("BOOLEAN") || name.contains("BIT") {
        FieldType::Boolean
    } else if name.contains("DATE") {
        FieldType::Date
    } else if name.contains("TIME") {
        if name.contains("TIMESTAMP") {
            FieldType::Timestamp
        } else {
            FieldType::Time
        }
    } else if name.contains("BLOB") {
        FieldType::Blob
    } else {
        FieldType::Text
    }
}
