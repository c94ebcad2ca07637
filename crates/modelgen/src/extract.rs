//! Schema extraction: introspection results → normalized [`DatabaseSchema`].

use crate::introspect::{IndexInfoRow, Introspect, PgIntrospection};
use crate::{DatabaseConfig, Error, Result};
use indexmap::IndexMap;
use modelgen_schema::{Column, DatabaseSchema, ForeignKey, Index, Table};

/// Extracts a [`DatabaseSchema`] from the configured database.
///
/// The connection is a scoped resource: each
/// [`extract_schema`](Self::extract_schema) call opens one, uses it for
/// the whole extraction, and releases it on every exit path, success or
/// failure. No connection is ever held across calls.
pub struct SchemaExtractor {
    config: DatabaseConfig,
}

impl SchemaExtractor {
    /// Create an extractor over the given configuration.
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Open a connection, extract the full schema, release the connection.
    ///
    /// Fails with [`Error::Connection`] if the connection cannot be opened
    /// and [`Error::Extraction`] if any introspection call fails. Nothing
    /// is retried.
    pub async fn extract_schema(&self) -> Result<DatabaseSchema> {
        let database_name = self.config.database_name()?.to_string();
        let (client, connection) = self
            .config
            .pg_config()?
            .connect(tokio_postgres::NoTls)
            .await
            .map_err(Error::Connection)?;

        // The driver task ends once the client is dropped below.
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!("database connection error: {e}");
            }
        });

        let introspection = PgIntrospection::new(&client);
        let schema = extract_with(&introspection, &database_name).await;

        drop(client);
        let _ = driver.await;

        schema
    }
}

/// Driver-agnostic extraction over any [`Introspect`] implementation.
///
/// Tables land in introspection return order. A failure in any call aborts
/// the whole extraction.
pub async fn extract_with<I: Introspect>(
    introspection: &I,
    database_name: &str,
) -> Result<DatabaseSchema> {
    let mut tables = Vec::new();
    for table_row in introspection.tables(database_name).await? {
        tables.push(extract_table(introspection, database_name, table_row.name).await?);
    }

    tracing::info!(
        database = database_name,
        tables = tables.len(),
        "extracted schema"
    );

    Ok(DatabaseSchema {
        name: database_name.to_string(),
        tables,
    })
}

async fn extract_table<I: Introspect>(
    introspection: &I,
    catalog: &str,
    name: String,
) -> Result<Table> {
    let mut columns: Vec<Column> = introspection
        .columns(catalog, &name)
        .await?
        .into_iter()
        .map(|row| Column {
            name: row.name,
            engine_type_name: row.type_name,
            size: row.size,
            nullable: row.nullable,
            is_primary_key: false,
            is_auto_increment: row.auto_increment,
            default_value: row.default_value,
        })
        .collect();

    // Only the first primary-key row is recorded; composite keys are
    // intentionally truncated to one column.
    let primary_key_column = introspection
        .primary_keys(catalog, &name)
        .await?
        .into_iter()
        .next()
        .map(|row| row.column_name);
    if let Some(pk) = &primary_key_column
        && let Some(column) = columns.iter_mut().find(|c| &c.name == pk)
    {
        column.is_primary_key = true;
    }

    let foreign_keys = introspection
        .imported_keys(catalog, &name)
        .await?
        .into_iter()
        .map(|row| ForeignKey {
            constraint_name: row.constraint_name,
            column_name: row.column_name,
            referenced_table: row.referenced_table,
            referenced_column: row.referenced_column,
        })
        .collect();

    let indexes = group_indexes(introspection.index_info(catalog, &name).await?);

    Ok(Table {
        name,
        columns,
        primary_key_column,
        foreign_keys,
        indexes,
    })
}

/// Group raw index rows into [`Index`] entries.
///
/// Rows sharing an index name accumulate their column names in encounter
/// order; the unique flag is the negation of the first-seen "non-unique"
/// flag (all rows for one index name are assumed to agree). Rows with a
/// null index name are dropped entirely, never materialized as an index
/// with an empty name.
fn group_indexes(rows: Vec<IndexInfoRow>) -> Vec<Index> {
    let mut grouped: IndexMap<String, Index> = IndexMap::new();
    for row in rows {
        let Some(name) = row.index_name else {
            continue;
        };
        let entry = grouped.entry(name.clone()).or_insert_with(|| Index {
            name,
            unique: !row.non_unique,
            column_names: Vec::new(),
        });
        if let Some(column) = row.column_name {
            entry.column_names.push(column);
        }
    }
    grouped.into_values().collect()
}

/// Probe connectivity with the configured credentials.
///
/// Opens a connection, runs `SELECT 1`, and releases the connection.
pub async fn check_connection(config: &DatabaseConfig) -> Result<()> {
    let (client, connection) = config
        .pg_config()?
        .connect(tokio_postgres::NoTls)
        .await
        .map_err(Error::Connection)?;

    let driver = tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::warn!("database connection error: {e}");
        }
    });

    let probe = client.simple_query("SELECT 1").await;

    drop(client);
    let _ = driver.await;

    probe.map(drop).map_err(Error::Connection)
}
