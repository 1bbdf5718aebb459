use anyhow::{Context, Result};
use clap::Parser;
use dupechecker::{cli::Cli, di::DependenciesInject};
use shared::{
    config::{Config, HttpClient},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::init().context("Failed to load configuration")?;
    if let Some(key_file) = &cli.key_file {
        config.analytics.key_file = key_file.clone();
    }

    let _logger = Logger::new("dupechecker", config.is_dev, &config.log_dir);

    let http = HttpClient::build(config.http_timeout)?;
    let di = DependenciesInject::new(&config.analytics, http);

    let output = di
        .dupecheck_service
        .report(&cli.query())
        .await
        .context("Duplicate transaction check failed")?;

    println!("{output}");

    info!("✅ dupechecker finished for view {}", cli.view_id);

    Ok(())
}
