//! Category command - list, add, rename and delete categories

use super::{Context, Result};
use crate::cli::CategoryCommands;
use crate::db::KeyValueStore;
use crate::output;
use crate::session::Session;

/// Execute a category subcommand
///
/// Listing is open to everyone; changes need admin mode.
///
/// # Errors
///
/// Returns `CatalogError::AdminRequired` for changes outside admin mode.
pub fn execute<S: KeyValueStore>(
    session: &mut Session<S>,
    command: &CategoryCommands,
    ctx: &Context<'_>,
) -> Result<()> {
    match command {
        CategoryCommands::List => {
            list(session, ctx);
            Ok(())
        }
        CategoryCommands::Add { name } => {
            if session.create_category(name)? {
                ctx.output.success(&format!("Added category '{}'", name.trim()));
            } else {
                ctx.output.warning(&format!("Category '{}' is empty or already exists", name.trim()));
            }
            Ok(())
        }
        CategoryCommands::Rename { old, new } => {
            if session.rename_category(old, new)? {
                ctx.output.success(&format!("Renamed category '{old}' to '{}'", new.trim()));
            } else {
                ctx.output
                    .warning(&format!("Cannot rename '{old}' to '{}'", new.trim()));
            }
            Ok(())
        }
        CategoryCommands::Remove { name } => {
            if session.delete_category(name, ctx)? {
                ctx.output.success(&format!("Deleted category '{name}'"));
            } else if session.categories().contains(name) {
                ctx.output.info("Cancelled.");
            } else {
                ctx.output.warning(&format!("Category '{name}' does not exist"));
            }
            Ok(())
        }
    }
}

fn list<S: KeyValueStore>(session: &Session<S>, ctx: &Context<'_>) {
    let categories = session.categories();
    if categories.is_empty() {
        if !ctx.quiet {
            ctx.output.info("No categories.");
        }
        return;
    }

    if !ctx.quiet {
        ctx.output.info("Categories:");
    }
    for name in categories {
        let count = session
            .catalog()
            .items()
            .iter()
            .filter(|item| &item.category == name)
            .count();
        ctx.output.write(&output::category_with_count(name, count, ctx.quiet));
    }
}
