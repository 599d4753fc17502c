//! `paperdesk`: inspect the subscription stores from the command line.
//!
//! Stores are seeded from fixtures at startup and live only for the
//! duration of the process. `create`, `update` and `delete` act on that
//! in-process copy; nothing is written back.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use commands::Output;

/// PaperDesk CLI.
#[derive(Parser, Debug)]
#[command(name = "paperdesk", about = "Subscription vendor admin CLI")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Directory with customers.json / publications.json fixture overrides.
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Resolve every store operation immediately.
    #[arg(long = "no-latency", global = true)]
    no_latency: bool,

    /// Apply the same simulated delay (ms) to every operation.
    #[arg(long = "latency-ms", global = true)]
    latency_ms: Option<u64>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: Output,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List records, or show one by id.
    Get {
        /// Resource type (customers, publications).
        resource: String,
        /// Optional record id for single get.
        id: Option<u32>,
        /// Only list records matching this search term.
        #[arg(long, default_value = "", conflicts_with = "id")]
        search: String,
    },

    /// Create a record and print it.
    Create {
        /// Resource type.
        resource: String,
        /// JSON body with every field of the record.
        #[arg(long = "json")]
        json_body: String,
    },

    /// Update a record (partial JSON) and print it.
    Update {
        /// Resource type.
        resource: String,
        /// Record id.
        id: u32,
        /// JSON body with the fields to change.
        #[arg(long = "json")]
        json_body: String,
    },

    /// Delete a record.
    Delete {
        /// Resource type.
        resource: String,
        /// Record id.
        id: u32,
    },

    /// Show the billing overview.
    Billing,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = config::Overrides {
        data_dir: cli.data_dir,
        no_latency: cli.no_latency,
        latency_ms: cli.latency_ms,
    };
    let service_config = config::resolve(cli.config.as_deref(), overrides)?;
    if let Some(dir) = &service_config.data_dir {
        info!("Using fixture directory {}", dir.display());
    }

    let service = paperdesk_subscription::SubscriptionService::from_config(&service_config)?;

    match cli.command {
        Commands::Get { resource, id, search } => {
            commands::resource::get(&service, &resource, id, &search, cli.output).await
        }
        Commands::Create { resource, json_body } => {
            commands::resource::create(&service, &resource, &json_body, cli.output).await
        }
        Commands::Update {
            resource,
            id,
            json_body,
        } => commands::resource::update(&service, &resource, id, &json_body, cli.output).await,
        Commands::Delete { resource, id } => {
            commands::resource::delete(&service, &resource, id).await
        }
        Commands::Billing => commands::billing::show(&service, cli.output).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_conflicts_with_id() {
        let err = Cli::try_parse_from(["paperdesk", "get", "customers", "3", "--search", "foo"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        assert!(Cli::try_parse_from(["paperdesk", "get", "customers", "--search", "foo"]).is_ok());
        assert!(Cli::try_parse_from(["paperdesk", "get", "customers", "3"]).is_ok());
    }

    #[test]
    fn mutation_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "paperdesk",
            "--no-latency",
            "update",
            "pubs",
            "2",
            "--json",
            r#"{"price": 7}"#,
        ])
        .unwrap();
        match cli.command {
            Commands::Update { resource, id, json_body } => {
                assert_eq!(resource, "pubs");
                assert_eq!(id, 2);
                assert_eq!(json_body, r#"{"price": 7}"#);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        // Create needs a body.
        assert!(Cli::try_parse_from(["paperdesk", "create", "customers"]).is_err());
    }
}
