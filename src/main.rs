use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lnbalance::client::LndRestClient;
use lnbalance::config::{Network, NodeConfig};
use lnbalance::display::{render, OutputFormat};
use lnbalance::report;

#[derive(Parser)]
#[command(
    name = "lnbalance",
    version,
    about = "Channel and wallet balance reporting for LND nodes",
    long_about = "lnbalance connects to a running LND node, fetches its channel \
                  list and on-chain wallet balance, and reports how the funds \
                  split across active/inactive channels and local/remote sides."
)]
struct Cli {
    /// Output format for the balance report
    #[arg(value_enum)]
    format: OutputFormat,

    /// Host and port of the node's REST interface
    #[arg(long, env = "LNBALANCE_HOST", default_value = "localhost:8080")]
    host: String,

    /// Bitcoin network the node runs on (selects the macaroon directory)
    #[arg(long, env = "LNBALANCE_NETWORK", value_enum, default_value_t = Network::Mainnet)]
    network: Network,

    /// Node directory holding tls.cert and the macaroon tree
    #[arg(long, env = "LNBALANCE_LND_DIR")]
    lnd_dir: Option<PathBuf>,

    /// Explicit path to the TLS certificate
    #[arg(long)]
    tls_cert: Option<PathBuf>,

    /// Explicit path to the macaroon presented to the node
    #[arg(long)]
    macaroon: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = NodeConfig::new(cli.host, cli.network, cli.lnd_dir, cli.tls_cert, cli.macaroon)?;
    let client = LndRestClient::connect(&config)?;

    let report = report::generate(&client)?;
    print!("{}", render(&report, cli.format)?);
    if cli.format != OutputFormat::Table {
        println!();
    }

    Ok(())
}

/// Logs go to stderr so the report on stdout stays machine-readable
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "lnbalance=debug" } else { "lnbalance=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
