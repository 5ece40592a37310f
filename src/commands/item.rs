//! Item command - create, edit, delete and lock catalog items

use super::{Context, Result};
use crate::FigdexError;
use crate::catalog::{AngleImage, ItemDraft};
use crate::cli::{ItemArgs, ItemCommands};
use crate::db::KeyValueStore;
use crate::session::Session;
use crate::ui::InputError;

/// Execute an item subcommand
///
/// # Errors
///
/// Returns `FigdexError::CatalogError` when the session rejects the change
/// (admin mode off, validation, duplicate name, locked or unknown item),
/// `InvalidInput` for malformed flags, and `InputError` if a prompt fails.
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, command: &ItemCommands, ctx: &Context<'_>) -> Result<()> {
    match command {
        ItemCommands::Add { fields } => add(session, fields, ctx),
        ItemCommands::Edit { id, fields } => edit(session, id, fields, ctx),
        ItemCommands::Remove { id } => remove(session, id, ctx),
        ItemCommands::Lock { id } => lock(session, id, true, ctx),
        ItemCommands::Unlock { id } => lock(session, id, false, ctx),
    }
}

fn add<S: KeyValueStore>(session: &mut Session<S>, fields: &ItemArgs, ctx: &Context<'_>) -> Result<()> {
    let draft = if fields.name.is_some() {
        fields
            .to_draft()
            .map_err(FigdexError::InvalidInput)?
            .with_form_defaults(ctx.default_source)
    } else {
        prompt_draft(session.categories(), ctx)?
    };

    let id = session.create_item(draft)?;
    if ctx.quiet {
        ctx.output.write(&id);
    } else {
        ctx.output.success(&format!("Created item {id}"));
    }
    Ok(())
}

/// Walk through the new-item form
fn prompt_draft(categories: &[String], ctx: &Context<'_>) -> Result<ItemDraft> {
    let name = ask(ctx, "Name", None, false)?;
    let character = ask(ctx, "Character", None, true)?;
    let source = ask(ctx, "Source", Some(ctx.default_source), true)?;
    let source_url = ask(ctx, "Source URL", None, true)?;

    let category = if categories.is_empty() {
        None
    } else {
        let index = ctx
            .input
            .prompt_select("Category", categories, Some(0))?
            .ok_or(InputError::Cancelled)?;
        Some(categories[index].clone())
    };

    let description = ask(ctx, "Description", None, true)?;
    let front = ask(ctx, "정면 image URL", None, true)?;
    let back = ask(ctx, "뒷면 image URL", None, true)?;

    Ok(ItemDraft {
        name: Some(name),
        character: Some(character),
        source: Some(source),
        source_url: Some(source_url),
        category,
        description: Some(description),
        angles: Some(vec![AngleImage::new("정면", front), AngleImage::new("뒷면", back)]),
        thumbnail: None,
        is_locked: None,
    })
}

fn ask(ctx: &Context<'_>, prompt: &str, default: Option<&str>, allow_empty: bool) -> Result<String> {
    Ok(ctx
        .input
        .prompt_text(prompt, default, allow_empty)?
        .ok_or(InputError::Cancelled)?)
}

fn edit<S: KeyValueStore>(session: &mut Session<S>, id: &str, fields: &ItemArgs, ctx: &Context<'_>) -> Result<()> {
    if fields.is_empty() {
        return Err(FigdexError::InvalidInput("Nothing to change".into()));
    }
    let draft = fields.to_draft().map_err(FigdexError::InvalidInput)?;
    session.update_item(id, draft)?;
    ctx.output.success(&format!("Updated item {id}"));
    Ok(())
}

fn remove<S: KeyValueStore>(session: &mut Session<S>, id: &str, ctx: &Context<'_>) -> Result<()> {
    if session.delete_item(id, ctx)? {
        ctx.output.success(&format!("Deleted item {id}"));
    } else {
        ctx.output.info("Cancelled.");
    }
    Ok(())
}

fn lock<S: KeyValueStore>(session: &mut Session<S>, id: &str, locked: bool, ctx: &Context<'_>) -> Result<()> {
    session.set_locked(id, locked)?;
    let verb = if locked { "Locked" } else { "Unlocked" };
    ctx.output.success(&format!("{verb} item {id}"));
    Ok(())
}
