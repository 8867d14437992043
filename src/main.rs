use std::{io, path::PathBuf, process::ExitCode};

use booktrack::{LibraryConfig, LibrarySystem, cli};
use clap::{ArgAction, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the BookTrack menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reservations accepted per book
    #[arg(long, conflicts_with = "unbounded_reservations")]
    reservation_capacity: Option<usize>,

    /// Accept any number of reservations per book
    #[arg(long)]
    unbounded_reservations: bool,

    /// Start with an empty catalog
    #[arg(long)]
    no_seed: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Build the configuration: file values first, then flag overrides
    fn library_config(&self) -> booktrack::Result<LibraryConfig> {
        let mut config = match &self.config {
            Some(path) => LibraryConfig::from_file(path)?,
            None => LibraryConfig::default(),
        };
        if let Some(capacity) = self.reservation_capacity {
            config.reservation_capacity = Some(capacity);
        }
        if self.unbounded_reservations {
            config.reservation_capacity = None;
        }
        if self.no_seed {
            config.seed_catalog = false;
        }
        Ok(config)
    }

    /// Default log level for the verbosity flag
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `-v`
fn init_tracing(level: Level) {
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    // A subscriber may already be installed when embedded; keep the existing one.
    if tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init().is_err()
    {
        eprintln!("tracing subscriber already installed");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    let config = match args.library_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::FAILURE;
        }
    };

    let mut system = LibrarySystem::new(&config);
    tracing::info!(%system, "library ready");

    let stdin = io::stdin();
    match cli::run(&mut system, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("I/O error: {e}").red());
            ExitCode::FAILURE
        }
    }
}
