use clap::Parser;
use rechnik_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    logging::init(&config.log);

    if let Err(e) = commands::run(cli, &config).await {
        tracing::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}
