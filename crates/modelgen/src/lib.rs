//! Database model generator core.
//!
//! This crate inspects a relational database's schema through a generic
//! introspection capability and produces one Rust type declaration per
//! table: scalar fields mapped from engine-native column types, plus
//! relationship fields derived from foreign keys.
//!
//! The pieces, leaves first:
//! - [`modelgen_schema`]: the normalized schema model and the pure
//!   naming/type transforms.
//! - [`introspect`]: the backend-facing capability, one implementation per
//!   driver ([`introspect::PgIntrospection`] for Postgres).
//! - [`SchemaExtractor`]: opens a scoped connection and normalizes
//!   introspection results into a [`DatabaseSchema`].
//! - [`MetadataCache`]: single-slot lazy cache over extraction.
//! - [`generate`]/[`generate_all`]: deterministic source generation with
//!   on-disk persistence.
//!
//! Everything here is fail-fast: no call is retried, and every failure
//! surfaces as one of the five [`Error`] kinds with its cause attached.

pub use modelgen_schema::{
    Column, DatabaseSchema, FieldType, ForeignKey, Index, Table, map_type, to_camel_case,
    to_pascal_case,
};

mod cache;
mod config;
mod error;
mod extract;
mod generate;
pub mod introspect;

pub use cache::{ExtractSchema, MetadataCache};
pub use config::DatabaseConfig;
pub use error::Error;
pub use extract::{SchemaExtractor, check_connection, extract_with};
pub use generate::{GENERATED_EXT, generate, generate_all, generate_one};

/// Result type for modelgen operations.
pub type Result<T> = std::result::Result<T, Error>;
