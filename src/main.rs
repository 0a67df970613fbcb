use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghfinder::{app, github, ui, util};

#[derive(Parser, Debug)]
#[command(name = "ghfinder", version, about = "GitHub profile finder for the terminal")]
struct Cli {
    /// Username to search for on startup
    username: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = util::config::AppConfig::load(cli.config.as_deref())?;
    let heatmap_theme = config.heatmap_theme()?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("ghfinder starting");

    // Resolve auth token before starting TUI
    let token = match github::auth::resolve_token() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Authentication error: {e}");
            std::process::exit(1);
        }
    };

    let client = github::GithubClient::new(&token, &config.github.api_url)?;

    let calendar = ui::heatmap::CalendarLegend::new(&config.web_url());

    app::event_loop::run(client, calendar, heatmap_theme, cli.username).await
}

fn setup_logging(
    config: &util::config::AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghfinder.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghfinder=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
