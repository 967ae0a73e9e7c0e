//! tack - A three-column kanban board for the terminal.
//!
//! This is the main binary: it loads the configuration, sets up logging,
//! opens the board from the data directory and runs the TUI.
//!
//! Usage: tack [--config <path>] [--data-dir <path>]

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, bail};
use tack_config::Config;
use tack_store::{FileStorage, Mutator, Store};
use tack_tui::{App, terminal::TerminalSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// What the command line asked for.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    help: bool,
    version: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-V" | "--version" => parsed.version = true,
                "-c" | "--config" => {
                    let Some(path) = args.next() else {
                        bail!("{arg} requires a path");
                    };
                    parsed.config = Some(path.into());
                }
                "-d" | "--data-dir" => {
                    let Some(path) = args.next() else {
                        bail!("{arg} requires a path");
                    };
                    parsed.data_dir = Some(path.into());
                }
                other => bail!("unexpected argument '{other}' (see --help)"),
            }
        }
        Ok(parsed)
    }
}

fn print_help() {
    println!(
        r#"tack - A three-column kanban board for the terminal

USAGE:
    tack [OPTIONS]

OPTIONS:
    -c, --config <PATH>      Load configuration from PATH
    -d, --data-dir <PATH>    Store the board in PATH
    -h, --help               Print help information
    -V, --version            Print version information

Press ? inside tack to see the keybindings."#
    );
}

/// Sends log records to the configured log file.
///
/// `RUST_LOG` takes precedence over `logging.level`.
fn init_logging(config: &Config) -> anyhow::Result<PathBuf> {
    let path = config.log_file().context("failed to locate log file")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        print_help();
        return Ok(());
    }
    if args.version {
        println!("tack {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let data_dir = config.data_dir().context("failed to locate data directory")?;

    let log_file = init_logging(&config)?;
    info!(
        data_dir = %data_dir.display(),
        log_file = %log_file.display(),
        "starting tack"
    );

    let mutator = Mutator::new(Store::new(FileStorage::new(data_dir)));
    let mut app = App::new(mutator);

    tack_tui::terminal::install_panic_hook();
    let mut session = TerminalSession::start()?;

    let result = app.run(session.terminal_mut()).await;

    // Always restore terminal, even if app.run() failed
    session.finish()?;
    info!("tack exited");

    result
}
