//! mockview CLI - visual verification against a mocked backend
//!
//! Usage:
//!   mockview                    Run all scenarios with defaults
//!   mockview run                Same, with optional overrides
//!   mockview scenarios          List the built-in scenarios

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use mockview_core::VerifyConfig;
use mockview_runner::{fixtures, VerificationRunner};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mockview")]
#[command(version, about = "Visual verification of web UIs against a mocked backend")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (defaults to mockview.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all verification scenarios
    Run {
        /// Origin of the application under verification
        #[arg(long)]
        base_url: Option<String>,

        /// Directory receiving screenshots and the run report
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Show the browser window instead of running headless
        #[arg(long)]
        headed: bool,
    },

    /// List the built-in scenarios
    Scenarios,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(cli.config.as_deref())?;

    // Bare `mockview` runs everything with defaults
    let command = cli.command.unwrap_or(Commands::Run {
        base_url: None,
        output_dir: None,
        headed: false,
    });

    match command {
        Commands::Run {
            base_url,
            output_dir,
            headed,
        } => cmd_run(config, base_url, output_dir, headed).await,
        Commands::Scenarios => cmd_scenarios(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<VerifyConfig> {
    let config = match path {
        // Explicit path must exist
        Some(path) => VerifyConfig::load(path)?,
        None => VerifyConfig::load_or_default(Path::new("mockview.toml"))?,
    };
    Ok(config)
}

async fn cmd_run(
    mut config: VerifyConfig,
    base_url: Option<String>,
    output_dir: Option<PathBuf>,
    headed: bool,
) -> Result<()> {
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }
    if headed {
        config.headless = false;
    }

    info!("Verifying {}", config.base_url);

    let runner = VerificationRunner::new(config);
    let report = runner.run().await?;

    for outcome in &report.outcomes {
        if outcome.passed() {
            info!(
                "PASS {} ({} ms) -> {}",
                outcome.scenario,
                outcome.duration_ms,
                outcome.screenshot.display()
            );
        } else {
            info!(
                "FAIL {} ({} ms): {} -> {}",
                outcome.scenario,
                outcome.duration_ms,
                outcome.error.as_deref().unwrap_or("unknown error"),
                outcome.screenshot.display()
            );
        }
    }

    if !report.all_passed() {
        bail!("{} scenario(s) failed", report.failed_count());
    }
    Ok(())
}

fn cmd_scenarios(config: &VerifyConfig) -> Result<()> {
    for scenario in fixtures::builtin_scenarios(&config.output_dir) {
        println!(
            "{:<18} {}  ({} step(s), screenshot: {})",
            scenario.name,
            scenario.path,
            scenario.steps.len(),
            scenario.screenshot.display()
        );
    }
    Ok(())
}
