//! figdex CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog interactively (default command)
//! figdex
//! figdex browse --bookmarks
//!
//! # List and show items
//! figdex list -c "여성 캐릭터" -s rei
//! figdex show 1712345678901 --next
//!
//! # Edit the catalog (admin mode)
//! figdex admin on
//! figdex item add -n Rei --character "Ayanami Rei" -a 정면=https://...
//! figdex category rename "여성 캐릭터" 여캐
//!
//! # Organize
//! figdex fav 1712345678901
//! figdex folder put 1712345678901 default
//! ```
//!
//! # Configuration
//!
//! On first run, figdex will prompt for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/figdex/config.toml` on Linux).
//! Log output goes to stderr and is controlled by `-v` or `RUST_LOG`.

use colored::Colorize;
use figdex::{
    FigdexError,
    cli::{Cli, Commands},
    commands::{self, Context},
    config::FigdexConfig,
    db::{Database, KeyValueStore, MemoryStore},
    session::{Session, SessionOptions},
    ui::{DialoguerInput, StdoutWriter},
};
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, FigdexError>;

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = match verbose {
        0 => "warn",
        1 => "figdex=debug,warn",
        _ => "figdex=trace,info",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn run_session<S: KeyValueStore>(
    store: S,
    config: &FigdexConfig,
    command: &Commands,
    ctx: &Context<'_>,
) -> Result<()> {
    let options = SessionOptions {
        placeholder_thumbnail: Some(config.placeholder_thumbnail.clone()),
    };
    let mut session = Session::with_options(store, &options);
    let result = commands::run(&mut session, command, ctx);

    if let Err(e) = session.flush() {
        warn!(error = %e, "failed to flush catalog");
    }
    result
}

/// Loads configuration, opens the catalog and dispatches to the command handler
///
/// # Errors
///
/// Returns `FigdexError` if configuration loading fails, the database cannot be
/// opened, or the command handler returns an error.
fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        commands::completions(*shell, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = if cli.yes {
        FigdexConfig::load()?
    } else {
        FigdexConfig::load_or_setup()?
    };
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::quiet(quiet);

    if let Commands::Config { command } = &command {
        let path = FigdexConfig::config_path()?;
        return commands::config(&mut config, &path, command, &output, quiet);
    }

    let input = DialoguerInput::new();
    let ctx = Context {
        input: &input,
        output: &output,
        quiet,
        assume_yes: cli.yes,
        default_source: &config.default_source,
    };

    if cli.memory {
        debug!("using in-memory catalog");
        return run_session(MemoryStore::new(), &config, &command, &ctx);
    }

    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => config.database_path()?,
    };
    debug!(path = %db_path.display(), "opening catalog");
    let db = Database::open(&db_path)?;
    run_session(db, &config, &command, &ctx)
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
}
