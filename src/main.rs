use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xmltv_guide::{
    config::Config, guide::GuideGenerator, repositories::JsonLinesChannelRepository,
    sources::load_channel_directory,
};

#[derive(Parser)]
#[command(name = "xmltv-guide")]
#[command(version)]
#[command(about = "Merges per-channel schedule records into a single XMLTV guide")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Prepared programmes file (overrides config and PUBLIC_PATH)
    #[arg(long, value_name = "PATH")]
    programs: Option<PathBuf>,

    /// Channel record store (overrides config file)
    #[arg(short = 'd', long, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Output guide path (overrides config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = format!("xmltv_guide={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting xmltv-guide v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    config.apply_env_overrides();

    // Override config with CLI arguments
    if let Some(programs) = cli.programs {
        config.input.programs_path = programs;
    }
    if let Some(database) = cli.database {
        config.input.database_path = database;
    }
    if let Some(output) = cli.output {
        config.output.guide_path = output;
    }

    info!("Using programmes file: {}", config.input.programs_path.display());
    info!("Using record store: {}", config.input.database_path.display());

    let directory = load_channel_directory(&config.input.programs_path).await?;
    let repository = JsonLinesChannelRepository::new(&config.input.database_path);

    GuideGenerator::new(repository)
        .generate_to_file(&directory, &config.output.guide_path)
        .await?;

    Ok(())
}
