//! The database introspection capability.
//!
//! Backends report schema structure through [`Introspect`], one
//! implementation per driver, supplied to the extractor by explicit
//! construction. Every call returns explicit row records describing the
//! result shape precisely rather than untyped key/value containers.

use crate::{Error, Result};
use tokio_postgres::types::ToSql;
use tracing::Instrument;

/// One row of a "list tables" result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Table name
    pub name: String,
}

/// One row of a "list columns" result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    /// Column name
    pub name: String,
    /// Engine-native type name, verbatim
    pub type_name: String,
    /// Character length or numeric precision
    pub size: i32,
    /// Whether the column allows NULL
    pub nullable: bool,
    /// Default value expression, verbatim and unparsed
    pub default_value: Option<String>,
    /// Whether the value is generated by the engine
    pub auto_increment: bool,
}

/// One row of a "list primary keys" result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyRow {
    /// Primary-key column name
    pub column_name: String,
}

/// One row of a "list imported (foreign) keys" result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedKeyRow {
    /// Constraint name
    pub constraint_name: String,
    /// Referencing column in the inspected table
    pub column_name: String,
    /// Referenced table
    pub referenced_table: String,
    /// Referenced column
    pub referenced_column: String,
}

/// One row of an "index info" result.
///
/// Backends emit one row per index column; rows sharing `index_name`
/// belong to the same index. Some backends interleave statistics rows with
/// a null index name; extraction drops those entirely. A null
/// `column_name` (e.g. an expression index member) contributes nothing to
/// the grouped column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfoRow {
    /// Index name, or `None` for statistics rows
    pub index_name: Option<String>,
    /// Raw "non-unique" flag as the backend reports it
    pub non_unique: bool,
    /// Column name, or `None` for non-column index members
    pub column_name: Option<String>,
}

/// Generic schema-introspection capability.
///
/// One implementation per backend driver. All methods take the catalog
/// (database) name the extractor derived from the connection target.
#[allow(async_fn_in_trait)]
pub trait Introspect {
    /// List base tables, excluding views and system objects.
    async fn tables(&self, catalog: &str) -> Result<Vec<TableRow>>;

    /// List a table's columns in ordinal order.
    async fn columns(&self, catalog: &str, table: &str) -> Result<Vec<ColumnRow>>;

    /// List primary-key rows for a table.
    async fn primary_keys(&self, catalog: &str, table: &str) -> Result<Vec<PrimaryKeyRow>>;

    /// List imported foreign-key rows for a table.
    async fn imported_keys(&self, catalog: &str, table: &str) -> Result<Vec<ImportedKeyRow>>;

    /// List index rows for a table, one per index column, ordered within
    /// each index.
    async fn index_info(&self, catalog: &str, table: &str) -> Result<Vec<IndexInfoRow>>;
}

/// Postgres implementation of [`Introspect`] over `information_schema` and
/// `pg_catalog`.
///
/// Engine type names are reported as the uppercased standard `data_type`
/// spellings (`INTEGER`, `TIMESTAMP WITHOUT TIME ZONE`, ...). Spellings
/// the type-mapping rules do not recognize (Postgres `NUMERIC`, `BYTEA`)
/// take the documented text fallback.
pub struct PgIntrospection<'a> {
    client: &'a tokio_postgres::Client,
}

impl<'a> PgIntrospection<'a> {
    /// Wrap an open client. The caller owns the connection's lifetime.
    pub fn new(client: &'a tokio_postgres::Client) -> Self {
        Self { client }
    }

    /// Run one introspection query, logging it via tracing.
    async fn query(
        &self,
        context: &str,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<tokio_postgres::Row>> {
        let span = tracing::debug_span!(
            "introspect.query",
            context = %context,
            params = params.len(),
            rows = tracing::field::Empty,
        );
        let rows = self
            .client
            .query(sql, params)
            .instrument(span.clone())
            .await
            .map_err(|e| Error::extraction(context.to_string(), e))?;
        span.record("rows", rows.len());
        Ok(rows)
    }
}

impl Introspect for PgIntrospection<'_> {
    async fn tables(&self, catalog: &str) -> Result<Vec<TableRow>> {
        let rows = self
            .query(
                "listing tables",
                "SELECT table_name \
                 FROM information_schema.tables \
                 WHERE table_catalog = $1 \
                   AND table_schema NOT IN ('pg_catalog', 'information_schema') \
                   AND table_type = 'BASE TABLE' \
                 ORDER BY table_name",
                &[&catalog],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| TableRow { name: row.get(0) })
            .collect())
    }

    async fn columns(&self, catalog: &str, table: &str) -> Result<Vec<ColumnRow>> {
        let rows = self
            .query(
                "listing columns",
                "SELECT column_name, \
                        upper(data_type) AS type_name, \
                        coalesce(character_maximum_length, numeric_precision, 0)::int AS size, \
                        (is_nullable = 'YES') AS nullable, \
                        column_default, \
                        (is_identity = 'YES' \
                         OR coalesce(column_default LIKE 'nextval(%', false)) AS auto_increment \
                 FROM information_schema.columns \
                 WHERE table_catalog = $1 AND table_name = $2 \
                 ORDER BY ordinal_position",
                &[&catalog, &table],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ColumnRow {
                name: row.get("column_name"),
                type_name: row.get("type_name"),
                size: row.get("size"),
                nullable: row.get("nullable"),
                default_value: row.get("column_default"),
                auto_increment: row.get("auto_increment"),
            })
            .collect())
    }

    async fn primary_keys(&self, catalog: &str, table: &str) -> Result<Vec<PrimaryKeyRow>> {
        let rows = self
            .query(
                "listing primary keys",
                "SELECT kcu.column_name \
                 FROM information_schema.table_constraints tc \
                 JOIN information_schema.key_column_usage kcu \
                   ON kcu.constraint_name = tc.constraint_name \
                  AND kcu.table_schema = tc.table_schema \
                 WHERE tc.table_catalog = $1 AND tc.table_name = $2 \
                   AND tc.constraint_type = 'PRIMARY KEY' \
                 ORDER BY kcu.ordinal_position",
                &[&catalog, &table],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| PrimaryKeyRow {
                column_name: row.get(0),
            })
            .collect())
    }

    async fn imported_keys(&self, catalog: &str, table: &str) -> Result<Vec<ImportedKeyRow>> {
        let rows = self
            .query(
                "listing imported keys",
                "SELECT tc.constraint_name, \
                        kcu.column_name, \
                        ccu.table_name AS referenced_table, \
                        ccu.column_name AS referenced_column \
                 FROM information_schema.table_constraints tc \
                 JOIN information_schema.key_column_usage kcu \
                   ON kcu.constraint_name = tc.constraint_name \
                  AND kcu.table_schema = tc.table_schema \
                 JOIN information_schema.constraint_column_usage ccu \
                   ON ccu.constraint_name = tc.constraint_name \
                  AND ccu.table_schema = tc.table_schema \
                 WHERE tc.table_catalog = $1 AND tc.table_name = $2 \
                   AND tc.constraint_type = 'FOREIGN KEY' \
                 ORDER BY tc.constraint_name, kcu.ordinal_position",
                &[&catalog, &table],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ImportedKeyRow {
                constraint_name: row.get("constraint_name"),
                column_name: row.get("column_name"),
                referenced_table: row.get("referenced_table"),
                referenced_column: row.get("referenced_column"),
            })
            .collect())
    }

    async fn index_info(&self, catalog: &str, table: &str) -> Result<Vec<IndexInfoRow>> {
        let rows = self
            .query(
                "listing index info",
                "SELECT i.relname AS index_name, \
                        NOT ix.indisunique AS non_unique, \
                        a.attname AS column_name \
                 FROM pg_catalog.pg_class t \
                 JOIN pg_catalog.pg_index ix ON ix.indrelid = t.oid \
                 JOIN pg_catalog.pg_class i ON i.oid = ix.indexrelid \
                 JOIN unnest(ix.indkey) WITH ORDINALITY AS k(attnum, ord) ON true \
                 LEFT JOIN pg_catalog.pg_attribute a \
                   ON a.attrelid = t.oid AND a.attnum = k.attnum \
                 WHERE current_database() = $1 \
                   AND t.relname = $2 AND t.relkind = 'r' \
                 ORDER BY i.relname, k.ord",
                &[&catalog, &table],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| IndexInfoRow {
                index_name: row.get("index_name"),
                non_unique: row.get("non_unique"),
                column_name: row.get("column_name"),
            })
            .collect())
    }
}
