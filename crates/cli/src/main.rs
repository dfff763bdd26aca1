use blockwatch_domain::{CliOverrides, Watermark};
use blockwatch_jobs::BlockWatchJob;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "blockwatch")]
#[command(version)]
#[command(about = "Blockwatch - forwards new SendGrid suppression blocks to a chat webhook")]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short = 'c', long, env = "BLOCKWATCH_CONFIG", value_name = "FILE")]
    config: Option<String>,

    /// Seconds between two SendGrid polls (default: 5)
    #[arg(long, env = "INTERVAL")]
    interval: Option<u64>,

    /// Chat webhook URL notifications are posted to (required)
    #[arg(long, env = "WEBHOOK_URI", hide_env_values = true)]
    webhook_uri: Option<String>,

    /// SendGrid API token (required)
    #[arg(long, env = "SENDGRID_TOKEN", hide_env_values = true)]
    sendgrid_token: Option<String>,

    /// SendGrid API base URL (default: https://api.sendgrid.com)
    #[arg(long, env = "SENDGRID_API_URL")]
    sendgrid_api_url: Option<String>,

    /// Initial watermark as a Unix timestamp (default: now)
    #[arg(long, env = "LAST_TIMESTAMP", allow_negative_numbers = true)]
    last_timestamp: Option<i64>,

    /// HTTP request timeout in seconds (default: none)
    #[arg(long, env = "REQUEST_TIMEOUT")]
    request_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            interval: self.interval,
            last_timestamp: self.last_timestamp,
            request_timeout: self.request_timeout,
            webhook_url: self.webhook_uri.clone(),
            sendgrid_token: self.sendgrid_token.clone(),
            sendgrid_api_url: self.sendgrid_api_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting Blockwatch v{}", env!("CARGO_PKG_VERSION"));

    let watermark = Watermark::starting_at(config.polling.last_timestamp);

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&adapters);

    let job = Arc::new(
        BlockWatchJob::new(use_cases.fetch_blocks, use_cases.process_blocks)
            .with_interval(config.polling.interval),
    );

    info!(
        interval_secs = config.polling.interval,
        api_url = %config.sendgrid.api_url,
        "Configuration loaded"
    );

    // Runs until the process is killed
    job.run(watermark).await;

    Ok(())
}
