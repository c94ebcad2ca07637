//! The `modelgen` binary: connectivity checks, schema inspection, and
//! model generation over a single configured database.

use clap::{Parser, Subcommand};
use modelgen::{
    DatabaseSchema, MetadataCache, SchemaExtractor, check_connection, generate_all, generate_one,
};
use owo_colors::OwoColorize;
use std::error::Error as _;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;

/// Generate model source declarations from live database metadata.
#[derive(Parser)]
#[command(name = "modelgen", version, about)]
struct Cli {
    /// Path to the configuration file (default: search for
    /// .config/modelgen.toml upwards from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe database connectivity with the configured credentials
    Check,
    /// Extract and print the database schema
    Schema {
        /// Print the full schema as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print metadata for a single table as JSON
    Table {
        /// Table name (matched case-insensitively)
        name: String,
    },
    /// Generate and persist model sources, for every table or just one
    Generate {
        /// Generate only this table's model (matched case-insensitively)
        table: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_path) = match &cli.config {
        Some(path) => config::load_path(path)?,
        None => config::load()?,
    };
    tracing::debug!(config = %config_path.display(), "loaded configuration");

    match cli.command {
        Commands::Check => {
            let database = config.database_name()?.to_string();
            check_connection(&config).await?;
            println!("{} connected to {database}", "ok:".green().bold());
        }
        Commands::Schema { json } => {
            let cache = MetadataCache::new(SchemaExtractor::new(config));
            let schema = cache.get().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&*schema)?);
            } else {
                print_schema(&schema);
            }
        }
        Commands::Table { name } => {
            let cache = MetadataCache::new(SchemaExtractor::new(config));
            let schema = cache.get().await?;
            let table = schema
                .tables
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(&name))
                .ok_or_else(|| format!("table not found: {name}"))?;
            println!("{}", serde_json::to_string_pretty(table)?);
        }
        Commands::Generate { table } => {
            let package = config.model_package.clone();
            let output_root = config.output_directory.clone();
            let cache = MetadataCache::new(SchemaExtractor::new(config));
            let schema = cache.get().await?;
            match table {
                Some(name) => {
                    let (type_name, _) = generate_one(&schema, &name, &package, &output_root)?;
                    println!(
                        "generated {type_name} under {}",
                        output_root.join(&schema.name)
                    );
                }
                None => {
                    let generated = generate_all(&schema, &package, &output_root)?;
                    println!(
                        "generated {} model(s) under {}",
                        generated.len(),
                        output_root.join(&schema.name)
                    );
                    for type_name in generated.keys() {
                        println!("  {type_name}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_schema(schema: &DatabaseSchema) {
    println!("database: {}", schema.name);
    for table in &schema.tables {
        let pk = table.primary_key_column.as_deref().unwrap_or("-");
        println!(
            "  {} ({} columns, pk: {})",
            table.name.bold(),
            table.columns.len(),
            pk
        );
        for fk in &table.foreign_keys {
            println!(
                "    fk {} -> {}.{}",
                fk.column_name, fk.referenced_table, fk.referenced_column
            );
        }
        for idx in &table.indexes {
            let unique = if idx.unique { "unique " } else { "" };
            println!(
                "    {}index {} ({})",
                unique,
                idx.name,
                idx.column_names.join(", ")
            );
        }
    }
}
