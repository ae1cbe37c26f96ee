//! `standards-db` CLI entry-point.
//!
//! Available sub-commands:
//! - `init`     — create every standards table in a database.
//! - `describe` — print the fields a table's records must carry.
//! - `schema`   — print a table's create statement.
//! - `list`     — list the known tables.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use db::{DbConfig, TableDescriptor};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATABASE_URL: &str = "sqlite://standards.db";

#[derive(Parser)]
#[command(
    name = "standards-db",
    about = "HVAC, lighting and ventilation standards reference database",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create every standards table (safe to re-run).
    Init {
        /// Defaults to `$DATABASE_URL`, then `sqlite://standards.db`.
        #[arg(long)]
        database_url: Option<String>,
        /// Enforce declared foreign keys on this connection.
        #[arg(long)]
        foreign_keys: bool,
    },
    /// Print the required and optional fields of a table.
    Describe {
        table: String,
        /// Instantiate a parameterized table under another name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the create statement of a table.
    Schema {
        table: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// List the known tables.
    List,
}

fn descriptor(table: &str, name: Option<&str>) -> anyhow::Result<TableDescriptor> {
    let schema = tables::find(table).ok_or_else(|| anyhow!("unknown table '{table}'"))?;
    let descriptor = match name {
        Some(name) => TableDescriptor::named(schema, name)?,
        None => TableDescriptor::new(schema)?,
    };
    Ok(descriptor)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init {
            database_url,
            foreign_keys,
        } => {
            let config = database_url
                .map(DbConfig::new)
                .unwrap_or_else(|| DbConfig::from_env_or(DEFAULT_DATABASE_URL))
                .with_foreign_keys(foreign_keys);
            let mut conn = db::connect(&config)
                .await
                .with_context(|| format!("cannot open {}", config.database_url))?;
            let created = tables::create_all(&mut conn).await?;
            for table in &created {
                info!("Ready: {}", table.name());
            }
        }
        Command::Describe { table, name } => {
            print!("{}", descriptor(&table, name.as_deref())?.record_info());
        }
        Command::Schema { table, name } => {
            println!("{}", descriptor(&table, name.as_deref())?.create_table_sql());
        }
        Command::List => {
            for descriptor in tables::registry()? {
                println!("{}", descriptor.name());
            }
        }
    }

    Ok(())
}
