//! Pomodoro Timer CLI - A full-screen terminal productivity tool
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 pomodoros

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};

use pomodoro_term::cli::{Cli, Commands, Display, SettingsCommand};
use pomodoro_term::runtime;
use pomodoro_term::storage::{default_data_dir, JsonFileStore, SettingsStore};

/// Log file written while the interactive timer owns the terminal.
const LOG_FILE_NAME: &str = "pomodoro.log";

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose, log_target(&cli));

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Where log output goes.
enum LogTarget {
    Stderr,
    File(File),
    Discard,
}

/// Chooses the log target; the interactive timer cannot share the screen.
fn log_target(cli: &Cli) -> LogTarget {
    if !matches!(cli.command, None | Some(Commands::Run)) {
        return LogTarget::Stderr;
    }
    let Ok(dir) = resolve_data_dir(cli.data_dir.clone()) else {
        return LogTarget::Discard;
    };
    let file = fs::create_dir_all(&dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))
    });
    match file {
        Ok(file) => LogTarget::File(file),
        Err(_) => LogTarget::Discard,
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool, target: LogTarget) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    match target {
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init(),
        LogTarget::File(file) => fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init(),
        LogTarget::Discard => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let dir = resolve_data_dir(cli.data_dir)?;
            runtime::run(&dir).await?;
        }
        Commands::Settings(SettingsCommand::Show) => {
            let store = open_store(cli.data_dir)?;
            Display::show_settings(&store.load_settings(), store.inner().path());
        }
        Commands::Settings(SettingsCommand::Set(args)) => {
            if args.is_empty() {
                bail!(
                    "nothing to change; pass --focus, --short-break, --long-break, --sound or --vibration"
                );
            }
            let mut store = open_store(cli.data_dir)?;
            let settings = args.apply(store.load_settings());
            settings.validate().map_err(anyhow::Error::msg)?;
            store
                .save_settings(&settings)
                .context("Failed to save settings")?;
            Display::show_settings_saved(&settings);
        }
        Commands::Settings(SettingsCommand::Reset) => {
            let mut store = open_store(cli.data_dir)?;
            store.clear().context("Failed to reset preferences")?;
            Display::show_settings_reset();
        }
        Commands::Layout { layout: None } => {
            let store = open_store(cli.data_dir)?;
            Display::show_layout(store.load_layout());
        }
        Commands::Layout {
            layout: Some(layout),
        } => {
            let mut store = open_store(cli.data_dir)?;
            store
                .save_layout(layout.into())
                .context("Failed to save layout")?;
            Display::show_layout_saved(layout.into());
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Returns the data directory from the flag or the platform default.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => default_data_dir().context("Failed to locate data directory"),
    }
}

/// Opens the preference store in the data directory.
fn open_store(flag: Option<PathBuf>) -> Result<SettingsStore<JsonFileStore>> {
    let dir = resolve_data_dir(flag)?;
    let store = JsonFileStore::open(&dir)
        .with_context(|| format!("Failed to open store in {}", dir.display()))?;
    Ok(SettingsStore::new(store))
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
