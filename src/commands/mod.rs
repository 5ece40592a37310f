//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a [`Session`]. Prompts and messages go
//! through the [`Context`], so commands behave the same in a terminal and in
//! tests.

pub mod admin;
pub mod browse;
pub mod category;
pub mod completions;
pub mod config;
pub mod favorite;
pub mod folder;
pub mod item;
pub mod list;
pub mod show;

pub use admin::execute as admin;
pub use browse::execute as browse;
pub use category::execute as category;
pub use completions::execute as completions;
pub use config::execute as config;
pub use favorite::execute as favorite;
pub use folder::execute as folder;
pub use item::execute as item;
pub use list::execute as list;
pub use show::execute as show;

use crate::FigdexError;
use crate::cli::Commands;
use crate::db::KeyValueStore;
use crate::session::{ConfirmGate, Session};
use crate::ui::{OutputWriter, PromptGate, UserInput};

type Result<T> = std::result::Result<T, FigdexError>;

/// Terminal collaborators and global flags shared by every command
pub struct Context<'a> {
    pub input: &'a dyn UserInput,
    pub output: &'a dyn OutputWriter,
    /// Print only results
    pub quiet: bool,
    /// Skip confirmation prompts
    pub assume_yes: bool,
    /// Source prefilled for new items
    pub default_source: &'a str,
}

impl ConfirmGate for Context<'_> {
    fn confirm(&self, prompt: &str) -> bool {
        self.assume_yes || PromptGate::new(self.input).confirm(prompt)
    }
}

/// Run a catalog command against an open session
///
/// # Errors
///
/// Returns `FigdexError` from the command, or `InvalidInput` for commands
/// that do not use the catalog.
pub fn run<S: KeyValueStore>(session: &mut Session<S>, command: &Commands, ctx: &Context<'_>) -> Result<()> {
    match command {
        Commands::List { view } => list(session, view.to_view_state(), ctx),
        Commands::Show { id, view, .. } => show(session, id, view.to_view_state(), command.direction(), ctx),
        Commands::Browse { view } => browse(session, view.to_view_state(), ctx),
        Commands::Item { command } => item(session, command, ctx),
        Commands::Category { command } => category(session, command, ctx),
        Commands::Folder { command } => folder(session, command, ctx),
        Commands::Fav { id } => favorite(session, id, ctx),
        Commands::Admin { command } => admin(session, *command, ctx),
        Commands::Config { .. } | Commands::Completions { .. } => Err(FigdexError::InvalidInput(
            "This command does not use the catalog".into(),
        )),
    }
}
