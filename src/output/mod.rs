//! Output formatting for CLI display
//!
//! This module turns items, folders and categories into display lines.
//! In quiet mode only the identifying value is printed so output can be
//! piped into other commands.

use crate::catalog::Item;
use crate::index::Folder;
use colored::Colorize;

/// Format an item as a single list line
#[must_use]
pub fn item_line(item: &Item, favorite: bool, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let mut line = format!("  {}  {}", item.id.dimmed(), item.name.bold());
    if !item.character.is_empty() {
        line.push_str(&format!(" ({})", item.character));
    }
    line.push_str(&format!(" [{}]", item.category.cyan()));
    if favorite {
        line.push_str(&format!(" {}", "★".yellow()));
    }
    if item.is_locked {
        line.push_str(" 🔒");
    }
    line
}

/// Format the detail view of an item
///
/// `position` is the 1-based index within the visible list and its length.
#[must_use]
pub fn item_detail(item: &Item, favorite: bool, position: Option<(usize, usize)>) -> Vec<String> {
    let mut lines = Vec::new();

    let mut title = item.name.bold().to_string();
    if favorite {
        title.push_str(&format!(" {}", "★".yellow()));
    }
    if item.is_locked {
        title.push_str(" 🔒");
    }
    if let Some((index, total)) = position {
        title.push_str(&format!("  {}", format!("({index}/{total})").dimmed()));
    }
    lines.push(title);

    lines.push(format!("  {:<10} {}", "id".dimmed(), item.id));
    if !item.character.is_empty() {
        lines.push(format!("  {:<10} {}", "character".dimmed(), item.character));
    }
    lines.push(format!("  {:<10} {}", "category".dimmed(), item.category.cyan()));
    match &item.source_url {
        Some(url) => lines.push(format!("  {:<10} {} <{}>", "source".dimmed(), item.source, url.underline())),
        None => lines.push(format!("  {:<10} {}", "source".dimmed(), item.source)),
    }
    if !item.description.is_empty() {
        lines.push(format!("  {:<10} {}", "notes".dimmed(), item.description));
    }
    for angle in &item.angles {
        if angle.has_url() {
            lines.push(format!("  {:<10} {}", angle.label.dimmed(), angle.url));
        } else {
            lines.push(format!("  {:<10} {}", angle.label.dimmed(), "(no image)".dimmed()));
        }
    }
    lines
}

/// Format a folder with its member count
#[must_use]
pub fn folder_line(folder: &Folder, active: bool, quiet: bool) -> String {
    if quiet {
        return folder.id.clone();
    }
    let marker = if active { "▸".green().to_string() } else { " ".to_string() };
    format!(
        "{marker} {}  {} ({} item(s))",
        folder.id.dimmed(),
        folder.name.bold(),
        folder.item_ids.len()
    )
}

/// Format a category with usage count
#[must_use]
pub fn category_with_count(name: &str, count: usize, quiet: bool) -> String {
    if quiet {
        name.to_string()
    } else {
        format!("  {name} (used by {count} item(s))")
    }
}
