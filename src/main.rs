use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pubmed_industry_papers::config::DEFAULT_TOOL;
use pubmed_industry_papers::{ClientConfig, PipelineOutcome, PubMedClient, fetch_and_save_papers};
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "get-papers-list",
    about = "Fetch research papers from PubMed based on a query",
    long_about = "Search PubMed and list papers with at least one author affiliated with a pharmaceutical or biotech company"
)]
struct Cli {
    /// Search query for PubMed
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output CSV file (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, visible_alias = "verbose")]
    debug: bool,

    /// Contact email sent to NCBI with every request
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name sent to NCBI with every request
    #[arg(long, env = "NCBI_TOOL", default_value = DEFAULT_TOOL)]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let mut config = ClientConfig::new().with_tool(&cli.tool);
    if let Some(email) = cli.email.as_deref() {
        config = config.with_email(email);
    }
    if config.uses_placeholder_email() {
        warn!("No contact email configured; set --email or NCBI_EMAIL so NCBI can reach you");
    }

    let client = PubMedClient::with_config(config);

    let outcome = fetch_and_save_papers(&client, &cli.query, cli.file.as_deref())
        .await
        .with_context(|| format!("failed to fetch papers for query '{}'", cli.query))?;

    let mut stdout = std::io::stdout();
    match outcome {
        PipelineOutcome::Saved(saved) => writeln!(stdout, "{}", saved)?,
        PipelineOutcome::Collected(papers) => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&papers)?)?
        }
    }

    Ok(())
}
