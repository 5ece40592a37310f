//! Browse command - interactive catalog browser
//!
//! # Workflow
//!
//! ```text
//! Session opened with the CLI filters
//!     ↓
//! ┌─→ Nothing open?
//! │   ├─ yes → list screen: pick an item or change filters (ESC quits)
//! │   └─ no  → detail screen: next/prev, bookmark, add to folder,
//! │            more by this character, back (ESC goes back)
//! └───────┘
//! ```
//!
//! The open item is resolved against the freshly filtered list on every
//! pass, so an item hidden by a filter change drops back to the list.

use super::{Context, Result};
use crate::db::KeyValueStore;
use crate::output;
use crate::session::Session;
use crate::view::{CategoryFilter, Direction, ViewMode, ViewState};

/// Menu entries shown below the items on the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListAction {
    Search,
    Category,
    Bookmarks,
    Folder,
    Reset,
    Quit,
}

impl ListAction {
    const ALL: [Self; 6] = [
        Self::Search,
        Self::Category,
        Self::Bookmarks,
        Self::Folder,
        Self::Reset,
        Self::Quit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Search => "🔍 Search…",
            Self::Category => "🏷  Category…",
            Self::Bookmarks => "★ Bookmarks",
            Self::Folder => "📁 Folder…",
            Self::Reset => "☰ All items",
            Self::Quit => "✕ Quit",
        }
    }
}

/// Actions on the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    Next,
    Prev,
    Favorite,
    AddToFolder,
    SearchCharacter,
    Back,
}

/// Execute the browse command
///
/// # Errors
///
/// Returns `InputError` if a prompt fails.
pub fn execute<S: KeyValueStore>(session: &mut Session<S>, view: ViewState, ctx: &Context<'_>) -> Result<()> {
    session.set_view(view);
    loop {
        if session.current_item().is_some() {
            detail_screen(session, ctx)?;
        } else if !list_screen(session, ctx)? {
            break;
        }
    }
    Ok(())
}

/// Returns `false` when the user quits
fn list_screen<S: KeyValueStore>(session: &mut Session<S>, ctx: &Context<'_>) -> Result<bool> {
    let visible: Vec<(String, String)> = session
        .visible_items()
        .into_iter()
        .map(|item| {
            let star = if session.is_favorite(&item.id) { " ★" } else { "" };
            (item.id.clone(), format!("{} [{}]{star}", item.name, item.category))
        })
        .collect();

    let mut labels: Vec<String> = visible.iter().map(|(_, label)| label.clone()).collect();
    labels.extend(ListAction::ALL.iter().map(|action| action.label().to_string()));

    let prompt = format!("{} · {} item(s)", describe(session.view()), visible.len());
    let Some(choice) = ctx.input.prompt_select(&prompt, &labels, Some(0))? else {
        return Ok(false);
    };

    if let Some((id, _)) = visible.get(choice) {
        session.open_item(id.clone());
        return Ok(true);
    }

    match ListAction::ALL[choice - visible.len()] {
        ListAction::Search => {
            let current = session.view().search.clone();
            if let Some(query) = ctx.input.prompt_text("Search", Some(&current), true)? {
                session.set_search(query);
            }
        }
        ListAction::Category => {
            let mut names = vec!["All".to_string()];
            names.extend(session.categories().iter().cloned());
            if let Some(index) = ctx.input.prompt_select("Category", &names, Some(0))? {
                let filter = if index == 0 {
                    CategoryFilter::All
                } else {
                    CategoryFilter::named(names[index].clone())
                };
                session.set_category(filter);
            }
        }
        ListAction::Bookmarks => session.show_bookmarks(),
        ListAction::Folder => {
            if let Some(id) = pick_folder(session, ctx, "Folder")? {
                session.select_folder(id);
            }
        }
        ListAction::Reset => session.reset_display(),
        ListAction::Quit => return Ok(false),
    }
    Ok(true)
}

fn detail_screen<S: KeyValueStore>(session: &mut Session<S>, ctx: &Context<'_>) -> Result<()> {
    let Some(item) = session.current_item() else {
        return Ok(());
    };
    let id = item.id.clone();
    let character = item.character.clone();
    let favorite = session.is_favorite(&id);

    let visible = session.visible_items();
    let position = visible
        .iter()
        .position(|candidate| candidate.id == id)
        .map(|index| (index + 1, visible.len()));
    for line in output::item_detail(item, favorite, position) {
        ctx.output.write(&line);
    }

    let mut actions = vec![
        (DetailAction::Next, "Next ▸".to_string()),
        (DetailAction::Prev, "◂ Previous".to_string()),
        (
            DetailAction::Favorite,
            if favorite { "☆ Remove bookmark" } else { "★ Bookmark" }.to_string(),
        ),
        (DetailAction::AddToFolder, "📁 Add to folder…".to_string()),
    ];
    if !character.is_empty() {
        actions.push((DetailAction::SearchCharacter, format!("🔍 More {character}")));
    }
    actions.push((DetailAction::Back, "Back".to_string()));

    let labels: Vec<String> = actions.iter().map(|(_, label)| label.clone()).collect();
    let action = ctx
        .input
        .prompt_select("Action", &labels, Some(0))?
        .map_or(DetailAction::Back, |index| actions[index].0);

    match action {
        DetailAction::Next => {
            session.navigate(Direction::Next);
        }
        DetailAction::Prev => {
            session.navigate(Direction::Prev);
        }
        DetailAction::Favorite => {
            session.toggle_favorite(&id);
        }
        DetailAction::AddToFolder => {
            if let Some(folder) = pick_folder(session, ctx, "Add to folder")? {
                if session.add_to_folder(&id, &folder) {
                    ctx.output.success("Added to folder");
                } else {
                    ctx.output.info("Already in that folder");
                }
            }
        }
        DetailAction::SearchCharacter => session.search_character(&character),
        DetailAction::Back => session.close(),
    }
    Ok(())
}

fn pick_folder<S: KeyValueStore>(session: &Session<S>, ctx: &Context<'_>, prompt: &str) -> Result<Option<String>> {
    let folders = session.folders();
    if folders.is_empty() {
        ctx.output.warning("No folders yet. Create one with `figdex folder add`.");
        return Ok(None);
    }
    let names: Vec<String> = folders.iter().map(|f| f.name.clone()).collect();
    let choice = ctx.input.prompt_select(prompt, &names, Some(0))?;
    Ok(choice.map(|index| folders[index].id.clone()))
}

fn describe(view: &ViewState) -> String {
    let scope = match &view.mode {
        ViewMode::All => "All".to_string(),
        ViewMode::Bookmarks => "Bookmarks".to_string(),
        ViewMode::Folder(id) => format!("Folder {id}"),
    };
    if view.search.trim().is_empty() {
        format!("{scope} / {}", view.category)
    } else {
        format!("{scope} / {} / \"{}\"", view.category, view.search)
    }
}
