//! Show command - open one item, optionally stepping through the visible list

use super::{Context, Result};
use crate::FigdexError;
use crate::catalog::CatalogError;
use crate::db::KeyValueStore;
use crate::output;
use crate::session::Session;
use crate::view::{Direction, ViewState};

/// Execute the show command
///
/// With a direction the item shown is the neighbour of `id` in the visible
/// list, wrapping around at either end.
///
/// # Errors
///
/// Returns `CatalogError::NotFound` for an unknown id, or `InvalidInput` if
/// the item exists but is hidden by the filters.
pub fn execute<S: KeyValueStore>(
    session: &mut Session<S>,
    id: &str,
    view: ViewState,
    direction: Option<Direction>,
    ctx: &Context<'_>,
) -> Result<()> {
    if session.item(id).is_none() {
        return Err(CatalogError::NotFound(id.to_string()).into());
    }
    session.set_view(view);
    session.open_item(id);
    if let Some(direction) = direction {
        session.navigate(direction);
    }

    let Some(item) = session.current_item() else {
        return Err(FigdexError::InvalidInput(format!(
            "Item '{id}' is not visible with the current filters"
        )));
    };

    if ctx.quiet {
        ctx.output.write(&item.id);
        return Ok(());
    }

    let visible = session.visible_items();
    let position = visible
        .iter()
        .position(|candidate| candidate.id == item.id)
        .map(|index| (index + 1, visible.len()));
    for line in output::item_detail(item, session.is_favorite(&item.id), position) {
        ctx.output.write(&line);
    }
    Ok(())
}
