//! List command - print the items visible under the given filters

use super::{Context, Result};
use crate::db::KeyValueStore;
use crate::output;
use crate::session::Session;
use crate::view::ViewState;

/// Execute the list command
///
/// # Errors
///
/// Listing itself cannot fail; the `Result` keeps the command signatures
/// uniform.
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, view: ViewState, ctx: &Context<'_>) -> Result<()> {
    if let Some(folder_id) = view.mode.folder_id()
        && session.folder(folder_id).is_none()
    {
        ctx.output.warning(&format!("Folder '{folder_id}' does not exist"));
    }
    session.set_view(view);

    let items = session.visible_items();
    if items.is_empty() {
        if !ctx.quiet {
            ctx.output.info("No items match.");
        }
        return Ok(());
    }

    if !ctx.quiet {
        ctx.output.info(&format!("{} item(s):", items.len()));
    }
    for item in items {
        ctx.output
            .write(&output::item_line(item, session.is_favorite(&item.id), ctx.quiet));
    }
    Ok(())
}
