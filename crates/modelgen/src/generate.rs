//! Model source generation.
//!
//! One generated unit per table: a struct declaration with one field per
//! column (camelCase name, mapped type) and one relationship field per
//! foreign key. Generation is a pure function of its inputs (identical
//! `(table, package)` always yields byte-identical text), so re-running
//! over an unchanged schema rewrites every file with identical content.

use crate::{Error, Result};
use camino::Utf8Path;
use indexmap::IndexMap;
use modelgen_schema::{DatabaseSchema, FieldType, Table, map_type, to_camel_case, to_pascal_case};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;

/// Extension of generated source files.
pub const GENERATED_EXT: &str = "rs";

/// Generate the model source for one table.
pub fn generate(table: &Table, package: &str) -> String {
    let type_name = to_pascal_case(&table.name);
    let mut src = String::new();

    let _ = writeln!(src, "//! Generated model for table `{}`.", table.name);
    src.push_str("//!\n");
    let _ = writeln!(src, "//! Package: {package}");
    src.push_str("//! @generated by modelgen. Do not edit.\n\n");

    // `use` lines only for the date/time types the fields reference.
    let mut uses_date = false;
    let mut uses_time = false;
    let mut uses_timestamp = false;
    for column in &table.columns {
        match map_type(&column.engine_type_name) {
            FieldType::Date => uses_date = true,
            FieldType::Time => uses_time = true,
            FieldType::Timestamp => uses_timestamp = true,
            _ => {}
        }
    }
    if uses_date {
        src.push_str("use jiff::civil::Date;\n");
    }
    if uses_time {
        src.push_str("use jiff::civil::Time;\n");
    }
    if uses_timestamp {
        src.push_str("use jiff::Timestamp;\n");
    }
    if uses_date || uses_time || uses_timestamp {
        src.push('\n');
    }

    let _ = writeln!(src, "/// Auto-generated model for table `{}`.", table.name);
    src.push_str("#[allow(non_snake_case)]\n");
    src.push_str("#[derive(Debug, Clone, PartialEq)]\n");
    let _ = writeln!(src, "pub struct {type_name} {{");

    for column in &table.columns {
        let mut markers = String::new();
        if column.is_primary_key {
            markers.push_str(" (primary key)");
        }
        if column.is_auto_increment {
            markers.push_str(" (auto increment)");
        }
        let _ = writeln!(
            src,
            "    /// {} - {}{}",
            column.name, column.engine_type_name, markers
        );

        let rust_type = map_type(&column.engine_type_name).rust_type();
        let field = to_camel_case(&column.name);
        if column.nullable {
            let _ = writeln!(src, "    pub {field}: Option<{rust_type}>,");
        } else {
            let _ = writeln!(src, "    pub {field}: {rust_type},");
        }
    }

    for fk in &table.foreign_keys {
        let _ = writeln!(
            src,
            "    /// Relationship `{}` referencing `{}`.",
            fk.constraint_name, fk.referenced_table
        );
        let _ = writeln!(
            src,
            "    pub {}: {},",
            to_camel_case(&fk.referenced_table),
            to_pascal_case(&fk.referenced_table)
        );
    }

    src.push_str("}\n");
    src
}

/// Generate and persist the model source for a single table.
///
/// The table is looked up case-insensitively; an unknown name is
/// [`Error::Generation`]. Returns the generated type name and source
/// text. Relationship targets are not validated here, since the
/// referenced types may be generated by a separate run.
pub fn generate_one(
    schema: &DatabaseSchema,
    table_name: &str,
    package: &str,
    output_root: &Utf8Path,
) -> Result<(String, String)> {
    let table = schema
        .tables
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(table_name))
        .ok_or_else(|| Error::Generation(format!("unknown table {table_name}")))?;

    let target_dir = output_root
        .join(&schema.name)
        .join(package.replace('.', "/"));
    fs::create_dir_all(&target_dir).map_err(|e| Error::Write {
        unit: target_dir.to_string(),
        source: e,
    })?;

    let type_name = to_pascal_case(&table.name);
    let source_text = generate(table, package);
    let path = target_dir.join(format!("{type_name}.{GENERATED_EXT}"));
    fs::write(&path, &source_text).map_err(|e| Error::Write {
        unit: type_name.clone(),
        source: e,
    })?;
    tracing::debug!(%path, "wrote generated model");
    Ok((type_name, source_text))
}

/// Generate and persist model sources for every table in the schema.
///
/// Returns the generated units keyed by type name, in table order. Files
/// land at `{output_root}/{schema.name}/{package as path}/{TypeName}.rs`,
/// with intermediate directories created idempotently. The batch aborts on
/// the first failed write with [`Error::Write`] naming the failing unit;
/// units already written remain on disk; there is no rollback.
pub fn generate_all(
    schema: &DatabaseSchema,
    package: &str,
    output_root: &Utf8Path,
) -> Result<IndexMap<String, String>> {
    // Every relationship field's type must correspond to a generated unit.
    let known: HashSet<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
    for table in &schema.tables {
        for fk in &table.foreign_keys {
            if !known.contains(fk.referenced_table.as_str()) {
                return Err(Error::Generation(format!(
                    "foreign key {} on table {} references unknown table {}",
                    fk.constraint_name, table.name, fk.referenced_table
                )));
            }
        }
    }

    let package_path = package.replace('.', "/");
    let target_dir = output_root.join(&schema.name).join(package_path);
    fs::create_dir_all(&target_dir).map_err(|e| Error::Write {
        unit: target_dir.to_string(),
        source: e,
    })?;

    let mut generated = IndexMap::new();
    for table in &schema.tables {
        let type_name = to_pascal_case(&table.name);
        let source_text = generate(table, package);
        let path = target_dir.join(format!("{type_name}.{GENERATED_EXT}"));
        fs::write(&path, &source_text).map_err(|e| Error::Write {
            unit: type_name.clone(),
            source: e,
        })?;
        tracing::debug!(%path, "wrote generated model");
        generated.insert(type_name, source_text);
    }

    tracing::info!(
        database = %schema.name,
        models = generated.len(),
        "generated model sources"
    );
    Ok(generated)
}
