//! speclib: manage a library of bridge design criteria entries.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use config::SpeclibConfig;

/// Exit status of `diff` when the entries differ.
const DIFFERENCES_FOUND: i32 = 2;

#[derive(Parser)]
#[command(name = "speclib", version, about = "Bridge design criteria library")]
struct Cli {
    /// More output per occurrence (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Library file (default: from speclib.toml, else ./criteria.slf)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a library holding one default entry
    Init,
    /// List the entries of the library
    List,
    /// Add an entry with default criteria
    New {
        /// Entry key
        key: String,
    },
    /// Remove an entry
    Remove {
        /// Entry key
        key: String,
    },
    /// Report every criterion of an entry
    Show {
        /// Entry key
        key: String,
    },
    /// Compare two entries
    Diff {
        /// Reference entry
        a: String,
        /// Entry compared against the reference
        b: String,
        /// Read `b` from this library instead
        #[arg(long)]
        other: Option<PathBuf>,
        /// Stop at the first difference
        #[arg(long)]
        stop_on_first: bool,
        /// Edition key to compare under (e.g. AashtoLrfd2020)
        #[arg(long)]
        edition: Option<String>,
    },
    /// Load the library and report entries converted from older formats
    Verify,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(DIFFERENCES_FOUND),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

/// Returns `false` when `diff` found differences.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir()?;
    let config = SpeclibConfig::find_and_load(&cwd)?;
    setup_logging(
        cli.verbose,
        config.as_ref().and_then(|(c, _)| c.log.filter.as_deref()),
    );
    if let Some((_, dir)) = &config {
        tracing::debug!(dir = %dir.display(), "using {}", config::CONFIG_FILE);
    }

    let library = config::resolve_library(cli.library.as_deref(), config.as_ref(), &cwd);
    execute(cli.command, &library, config.as_ref().map(|(c, _)| c))
}

fn execute(
    command: Commands,
    library: &Path,
    config: Option<&SpeclibConfig>,
) -> anyhow::Result<bool> {
    match command {
        Commands::Init => commands::init::run(library)?,
        Commands::List => commands::list::run(library)?,
        Commands::New { key } => commands::entry::new(library, &key)?,
        Commands::Remove { key } => commands::entry::remove(library, &key)?,
        Commands::Show { key } => commands::show::run(library, &key)?,
        Commands::Diff {
            a,
            b,
            other,
            stop_on_first,
            edition,
        } => {
            let edition = match edition {
                Some(key) => Some(config::parse_edition(&key)?),
                None => match config {
                    Some(config) => config.compare_edition()?,
                    None => None,
                },
            };
            let options = commands::diff::DiffOptions {
                other: other.as_deref(),
                stop_on_first: stop_on_first
                    || config.is_some_and(|c| c.compare.stop_on_first),
                edition,
            };
            return commands::diff::run(library, &a, &b, &options);
        }
        Commands::Verify => commands::verify::run(library)?,
    }
    Ok(true)
}

fn setup_logging(verbosity: u8, configured: Option<&str>) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let from_config = configured
        .filter(|_| verbosity == 0 && std::env::var_os(EnvFilter::DEFAULT_ENV).is_none())
        .and_then(|directives| EnvFilter::try_new(directives).ok());
    let filter =
        from_config.unwrap_or_else(|| EnvFilter::from_default_env().add_directive(level.into()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
