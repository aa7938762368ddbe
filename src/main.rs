//! Moonwalk CLI
//!
//! Dances in the terminal, or prints tick frames as JSON in headless mode.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use moonwalk::dance::DanceMode;
use moonwalk::headless::{self, HeadlessOptions, DEFAULT_STAGE_WIDTH};
use moonwalk::tui::App;
use moonwalk::MoonwalkConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Moonwalk - a looping terminal dance animation
#[derive(Parser, Debug)]
#[command(name = "moonwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay between dance steps in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    delay: Option<u64>,

    /// Dance style to start with
    #[arg(long, value_enum)]
    dance: Option<DanceMode>,

    /// Start dancing right away
    #[arg(long)]
    autostart: bool,

    /// Disable TUI and print one JSON frame per tick
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks (headless mode)
    #[arg(long)]
    ticks: Option<u64>,

    /// Width of the virtual stage in pixels (headless mode)
    #[arg(long, default_value_t = DEFAULT_STAGE_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    stage_width: i32,

    /// Write logs to this file (TUI mode)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose output: log every tick
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if cli.headless {
        run_headless_mode(&cli, &config).await
    } else {
        run_tui_mode(&cli, &config).await
    }
}

/// Defaults, then the config file, then CLI flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<MoonwalkConfig> {
    let path = cli.config.clone().or_else(MoonwalkConfig::default_path);
    let mut config = match path {
        Some(path) => MoonwalkConfig::load(&path)?,
        None => MoonwalkConfig::default(),
    };

    if let Some(ms) = cli.delay {
        config = config.with_delay(Duration::from_millis(ms));
    }
    if let Some(dance) = cli.dance {
        config = config.with_dance(dance);
    }
    if cli.autostart {
        config = config.with_autostart(true);
    }
    Ok(config)
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

async fn run_tui_mode(cli: &Cli, config: &MoonwalkConfig) -> anyhow::Result<()> {
    // The terminal belongs to the TUI, so logs only go to a file
    if let Some(log_file) = &cli.log_file {
        let file = std::fs::File::create(log_file)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(cli.verbose))
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    info!("Starting Moonwalk (TUI mode)");
    let mut app = App::new(config)?;

    // Run TUI (this blocks until quit)
    app.run().await?;

    Ok(())
}

async fn run_headless_mode(cli: &Cli, config: &MoonwalkConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting Moonwalk (headless mode)");
    let options = HeadlessOptions {
        ticks: cli.ticks,
        stage_width: cli.stage_width,
    };
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    headless::run(config, &options, shutdown, &mut out).await?;

    Ok(())
}
