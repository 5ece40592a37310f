//! Folder command - manage bookmark folders and their members

use super::{Context, Result};
use crate::FigdexError;
use crate::cli::FolderCommands;
use crate::db::KeyValueStore;
use crate::output;
use crate::session::Session;

/// Execute a folder subcommand
///
/// Folders are personal and never need admin mode.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank folder name.
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, command: &FolderCommands, ctx: &Context<'_>) -> Result<()> {
    match command {
        FolderCommands::List => {
            let active = session.view().mode.folder_id().map(ToString::to_string);
            for folder in session.folders() {
                let is_active = active.as_deref() == Some(folder.id.as_str());
                ctx.output.write(&output::folder_line(folder, is_active, ctx.quiet));
            }
        }
        FolderCommands::Add { name } => {
            let id = session
                .create_folder(name)
                .ok_or_else(|| FigdexError::InvalidInput("Folder name is empty".into()))?;
            if ctx.quiet {
                ctx.output.write(&id);
            } else {
                ctx.output.success(&format!("Created folder '{}' ({id})", name.trim()));
            }
        }
        FolderCommands::Rename { id, name } => {
            if session.rename_folder(id, name) {
                ctx.output.success(&format!("Renamed folder {id} to '{}'", name.trim()));
            } else {
                ctx.output.warning(&format!("Folder '{id}' does not exist or the name is empty"));
            }
        }
        FolderCommands::Remove { id } => {
            if session.delete_folder(id, ctx) {
                ctx.output.success(&format!("Deleted folder {id}"));
            } else if session.folder(id).is_some() {
                ctx.output.info("Cancelled.");
            } else {
                ctx.output.warning(&format!("Folder '{id}' does not exist"));
            }
        }
        FolderCommands::Put { item, folder } => {
            if session.folder(folder).is_none() {
                ctx.output.warning(&format!("Folder '{folder}' does not exist"));
            } else if session.add_to_folder(item, folder) {
                ctx.output.success(&format!("Added {item} to folder {folder}"));
            } else {
                ctx.output.info(&format!("{item} is already in folder {folder}"));
            }
        }
        FolderCommands::Pull { item, folder } => {
            if session.remove_from_folder(item, folder) {
                ctx.output.success(&format!("Removed {item} from folder {folder}"));
            } else {
                ctx.output.warning(&format!("{item} is not in folder {folder}"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, session};
    use crate::index::DEFAULT_FOLDER_ID;
    use crate::ui::mock::ScriptedInput;
    use crate::ui::{BufferedWriter, MessageLevel};

    #[test]
    fn test_add_put_list() {
        let (mut session, rei, _) = session();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();
        let ctx = Context { quiet: true, ..context(&input, &output) };

        execute(&mut session, &FolderCommands::Add { name: "EVA".into() }, &ctx).unwrap();
        let id = output.at(MessageLevel::Normal)[0].clone();

        let put = FolderCommands::Put { item: rei.clone(), folder: id.clone() };
        execute(&mut session, &put, &ctx).unwrap();
        execute(&mut session, &put, &ctx).unwrap();
        assert_eq!(session.folder(&id).unwrap().item_ids, vec![rei]);

        execute(&mut session, &FolderCommands::List, &ctx).unwrap();
        assert_eq!(output.at(MessageLevel::Normal), vec![id.clone(), DEFAULT_FOLDER_ID.to_string(), id]);
    }

    #[test]
    fn test_add_blank_name() {
        let (mut session, _, _) = session();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();

        let result = execute(&mut session, &FolderCommands::Add { name: "  ".into() }, &context(&input, &output));
        assert!(matches!(result, Err(FigdexError::InvalidInput(_))));
    }

    #[test]
    fn test_put_unknown_folder() {
        let (mut session, rei, _) = session();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();

        let put = FolderCommands::Put { item: rei, folder: "nope".into() };
        execute(&mut session, &put, &context(&input, &output)).unwrap();
        assert_eq!(output.at(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn test_pull_and_remove() {
        let (mut session, rei, _) = session();
        session.add_to_folder(&rei, DEFAULT_FOLDER_ID);
        let input = ScriptedInput::new().confirm(true);
        let output = BufferedWriter::new();
        let ctx = context(&input, &output);

        let pull = FolderCommands::Pull { item: rei.clone(), folder: DEFAULT_FOLDER_ID.into() };
        execute(&mut session, &pull, &ctx).unwrap();
        assert!(!session.folder(DEFAULT_FOLDER_ID).unwrap().contains(&rei));

        execute(&mut session, &FolderCommands::Remove { id: DEFAULT_FOLDER_ID.into() }, &ctx).unwrap();
        assert!(session.folders().is_empty());
    }

    #[test]
    fn test_rename() {
        let (mut session, _, _) = session();
        let input = ScriptedInput::new();
        let output = BufferedWriter::new();

        let command = FolderCommands::Rename { id: DEFAULT_FOLDER_ID.into(), name: "Shelf".into() };
        execute(&mut session, &command, &context(&input, &output)).unwrap();
        assert_eq!(session.folder(DEFAULT_FOLDER_ID).unwrap().name, "Shelf");
    }
}
