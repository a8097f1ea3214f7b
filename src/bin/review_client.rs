use anyhow::Result;
use clap::Parser;
use review_service::client::ReviewClient;
use review_service::config::DEFAULT_PORT;
use review_service::telemetry;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "review-client")]
#[command(about = "Fetch reviews for one context key from a running review service")]
struct Cli {
    /// Category key to ask for
    #[arg(default_value = "camera")]
    context_key: String,

    /// Server host
    #[arg(default_value = "localhost")]
    host: String,

    /// Server port; falls back to the default when unparsable
    port: Option<String>,
}

fn resolve_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Port {} is invalid, use default port {}.", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_logging()?;

    let cli = Cli::parse();
    let port = resolve_port(cli.port.as_deref());

    let client = ReviewClient::new(&cli.host, port)?;
    match client.get_reviews(&cli.context_key).await {
        Ok(reviews) => {
            for review in reviews {
                info!("Reviews: {}", review.text);
            }
        }
        Err(e) => warn!("RPC failed: {}", e),
    }

    info!("Exiting review client...");
    Ok(())
}
