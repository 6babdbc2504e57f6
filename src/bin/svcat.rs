//! svcat - command-line view of the service catalog.
//!
//! Supports:
//! - `svcat get brokers [-o table|json|yaml]`
//! - `svcat get broker NAME [-o table|json|yaml]`
//! - `svcat describe broker NAME`

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use service_catalog::Error;
use service_catalog::crd::ClusterServiceBroker;
use service_catalog::output::{
    OutputFormat, write_broker, write_broker_details, write_broker_list,
};

#[derive(Parser)]
#[command(name = "svcat")]
#[command(about = "Inspect service catalog resources", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display one or many resources
    Get {
        #[command(subcommand)]
        resource: GetCommands,
    },

    /// Show details of a specific resource
    Describe {
        #[command(subcommand)]
        resource: DescribeCommands,
    },
}

#[derive(Subcommand)]
enum GetCommands {
    /// List brokers
    Brokers {
        /// Output format: table, json or yaml
        #[arg(short, long, default_value = "table")]
        output: OutputFormat,
    },

    /// Show a single broker
    Broker {
        /// Broker name
        name: String,

        /// Output format: table, json or yaml
        #[arg(short, long, default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(Subcommand)]
enum DescribeCommands {
    /// Describe a broker
    Broker {
        /// Broker name
        name: String,
    },
}

/// Fetch one broker, naming it when the API server reports it missing.
async fn get_broker(
    brokers: &Api<ClusterServiceBroker>,
    name: &str,
) -> service_catalog::Result<ClusterServiceBroker> {
    brokers
        .get(name)
        .await
        .map_err(|e| Error::from(e).or_not_found("broker", name))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> service_catalog::Result<()> {
    let client = Client::try_default().await?;
    let brokers: Api<ClusterServiceBroker> = Api::all(client);

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Get {
            resource: GetCommands::Brokers { output },
        } => {
            let list = brokers.list(&ListParams::default()).await?;
            debug!(count = list.items.len(), "Listed brokers");
            write_broker_list(&mut stdout, output, &list.items)?;
        }
        Commands::Get {
            resource: GetCommands::Broker { name, output },
        } => {
            let broker = get_broker(&brokers, &name).await?;
            write_broker(&mut stdout, output, &broker)?;
        }
        Commands::Describe {
            resource: DescribeCommands::Broker { name },
        } => {
            let broker = get_broker(&brokers, &name).await?;
            write_broker_details(&mut stdout, &broker)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
