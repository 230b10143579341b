//! get-papers-list - Entry point
//!
//! Fetches papers for a PubMed query and reports those with at least one
//! author affiliated with a pharmaceutical or biotech company.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_company_papers::{Config, EntrezClient, fetch, formatters};

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(about = "Find PubMed papers with pharma/biotech-affiliated authors")]
#[command(version)]
struct Cli {
    /// PubMed search query (PubMed query syntax)
    query: String,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,

    /// Save results to this file as CSV instead of printing a table
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of results to return after filtering
    #[arg(short, long, default_value_t = 100)]
    max_results: usize,

    /// NCBI API key (optional, raises the granted rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(debug: bool, json: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so the stdout table/CSV stays clean
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        query = %cli.query,
        max_results = cli.max_results,
        "starting search"
    );

    let config = Config::new(cli.api_key);
    let client = EntrezClient::new(config)?;

    let papers = fetch::run(&client, &cli.query, cli.max_results).await?;

    if papers.is_empty() {
        println!("No papers found with authors from pharmaceutical or biotech companies.");
        return Ok(());
    }

    match cli.file {
        Some(path) => {
            formatters::csv::write_file(&papers, &path)?;
            println!("Results saved to {}", path.display());
        }
        None => {
            println!("{}", formatters::table::render(&papers));
        }
    }

    Ok(())
}
