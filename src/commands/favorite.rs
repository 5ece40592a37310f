//! Favorite command - toggle the bookmark mark on an item

use super::{Context, Result};
use crate::catalog::CatalogError;
use crate::db::KeyValueStore;
use crate::session::Session;

/// Execute the favorite toggle
///
/// # Errors
///
/// Returns `CatalogError::NotFound` when no item has `id` and it is not
/// already marked. Stale marks on deleted items can still be cleared.
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, id: &str, ctx: &Context<'_>) -> Result<()> {
    if session.item(id).is_none() && !session.is_favorite(id) {
        return Err(CatalogError::NotFound(id.to_string()).into());
    }

    if session.toggle_favorite(id) {
        ctx.output.success(&format!("★ Bookmarked {id}"));
    } else {
        ctx.output.success(&format!("Removed bookmark from {id}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FigdexError;
    use crate::commands::test_support::{context, session};
    use crate::ui::BufferedWriter;
    use crate::ui::mock::ScriptedInput;

    #[test]
    fn test_toggle_twice() {
        let (mut session, rei, _) = session();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();
        let ctx = context(&input, &output);

        execute(&mut session, &rei, &ctx).unwrap();
        assert!(session.is_favorite(&rei));
        execute(&mut session, &rei, &ctx).unwrap();
        assert!(!session.is_favorite(&rei));
    }

    #[test]
    fn test_unknown_item() {
        let (mut session, _, _) = session();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();

        let result = execute(&mut session, "nope", &context(&input, &output));
        assert!(matches!(result, Err(FigdexError::CatalogError(CatalogError::NotFound(_)))));
    }

    #[test]
    fn test_clear_stale_mark() {
        let (mut session, rei, _) = session();
        session.toggle_favorite(&rei);
        session.delete_item(&rei, &crate::session::AlwaysConfirm).unwrap();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();

        execute(&mut session, &rei, &context(&input, &output)).unwrap();
        assert!(!session.is_favorite(&rei));
    }
}
