//! Admin command - switch admin mode on or off

use super::{Context, Result};
use crate::cli::AdminCommands;
use crate::db::KeyValueStore;
use crate::session::Session;

/// Execute an admin subcommand
///
/// # Errors
///
/// Never fails; the `Result` keeps the command signatures uniform.
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, command: AdminCommands, ctx: &Context<'_>) -> Result<()> {
    match command {
        AdminCommands::On => {
            session.set_admin(true);
            ctx.output.success("Admin mode on");
        }
        AdminCommands::Off => {
            session.set_admin(false);
            ctx.output.success("Admin mode off");
        }
        AdminCommands::Status => {
            let state = if session.is_admin() { "on" } else { "off" };
            if ctx.quiet {
                ctx.output.write(state);
            } else {
                ctx.output.write(&format!("Admin mode is {state}"));
            }
        }
    }
    Ok(())
}
