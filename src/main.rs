//! blockclock - colored blocks and an elapsed-time clock in the terminal
//!
//! Draws until killed. An interrupt (Ctrl+C) lets the renderers finish their
//! current pause, restores the terminal and exits; a second interrupt exits
//! immediately.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use blockclock::config::loader::{render_config, validate_config, ConfigFormat};
use blockclock::{
    CancellationToken, Color, Config, ConfigLoader, Orchestrator, RunningTasks, StdoutWriter,
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "blockclock", version, about)]
struct AppArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, env = "BLOCKCLOCK_CONFIG")]
    config: Option<PathBuf>,

    /// Terminal rows
    #[arg(long)]
    rows: Option<u32>,

    /// Terminal columns
    #[arg(long)]
    cols: Option<u32>,

    /// Block colors, one renderer each (red, green, blue, yellow)
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<Color>>,

    /// Seed for reproducible block positions
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between block draws
    #[arg(long)]
    block_interval_ms: Option<u64>,

    /// Milliseconds between clock updates
    #[arg(long)]
    clock_interval_ms: Option<u64>,

    /// Stop after this many seconds instead of running until killed
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl AppArgs {
    /// Apply command line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.terminal.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.terminal.cols = cols;
        }
        if let Some(colors) = &self.colors {
            config.blocks.colors = colors.clone();
        }
        if let Some(seed) = self.seed {
            config.random.seed = Some(seed);
        }
        if let Some(ms) = self.block_interval_ms {
            config.blocks.interval_ms = ms;
        }
        if let Some(ms) = self.clock_interval_ms {
            config.clock.interval_ms = ms;
        }
    }
}

fn main() -> ExitCode {
    let args = AppArgs::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("blockclock: {:#}", e);
        return ExitCode::from(2);
    }

    let config = match load_configuration(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("blockclock: {}", e);
            return ExitCode::from(2);
        }
    };

    if args.print_config {
        return match render_config(&config, ConfigFormat::Toml) {
            Ok(rendered) => {
                print!("{}", rendered);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("blockclock: {}", e);
                ExitCode::from(2)
            }
        };
    }

    match run(config, args.duration_secs.map(Duration::from_secs)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("blockclock: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging. Logs never go to stdout, which belongs to the animation.
fn init_logging(args: &AppArgs) -> anyhow::Result<()> {
    let default_level = if args.debug { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env("BLOCKCLOCK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(true)
        .compact();

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Load configuration from `--config` or the default locations, then apply flags
fn load_configuration(args: &AppArgs) -> blockclock::Result<Config> {
    let mut loader = ConfigLoader::new();
    let mut config = match &args.config {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };

    args.apply_overrides(&mut config);
    validate_config(&config)?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Cancel the renderers on the first interrupt; exit on the second
fn install_interrupt_handler(token: CancellationToken) -> blockclock::Result<()> {
    ctrlc::set_handler(move || {
        if interrupt(&token) {
            std::process::exit(130);
        }
    })?;
    Ok(())
}

/// Record an interrupt. Returns true when the process should exit at once.
fn interrupt(token: &CancellationToken) -> bool {
    if token.is_cancelled() {
        return true;
    }
    info!("Interrupted, stopping renderers");
    token.cancel();
    false
}

/// Wait for the renderers to stop, then restore the terminal even if one failed
fn wait_and_restore<W: Write + Clone + Send + 'static>(
    orchestrator: &Orchestrator<W>,
    running: RunningTasks,
) -> anyhow::Result<u64> {
    let joined = running.join();
    orchestrator.restore_terminal();
    joined.context("Renderer failed")
}

fn run(config: Config, duration: Option<Duration>) -> anyhow::Result<()> {
    info!("Starting {} v{}", blockclock::NAME, blockclock::VERSION);

    let orchestrator = Orchestrator::new(config, StdoutWriter);
    let running = match orchestrator.launch() {
        Ok(running) => running,
        Err(e) => {
            error!("{}", e);
            std::process::abort();
        }
    };

    if let Err(e) = install_interrupt_handler(running.token()) {
        warn!("{}. Ctrl+C will not restore the terminal", e);
    }

    if let Some(duration) = duration {
        running
            .cancel_after(duration)
            .context("Failed to schedule stop")?;
    }

    let ticks = wait_and_restore(&orchestrator, running)?;
    info!("Stopped after {} ticks", ticks);
    Ok(())
}
