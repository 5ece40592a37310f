//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for figdex using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Print the items visible under the given filters
//! - **show**: Open one item, optionally stepping to the next/previous one
//! - **browse**: Interactive catalog browser (default)
//! - **item / category**: Catalog editing (admin mode)
//! - **folder / fav**: Personal organization
//! - **admin / config / completions**: Housekeeping
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use figdex::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["figdex", "list", "--bookmarks", "-s", "rei"]);
//! assert!(matches!(cli.command, Some(Commands::List { .. })));
//! ```

use crate::catalog::{AngleImage, ItemDraft};
use crate::view::{Direction, ViewMode, ViewState};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "figdex")]
#[command(about = "A local catalog of collectible figures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog database path (overrides config)
    #[arg(long = "db", value_name = "PATH", global = true, conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory catalog
    #[arg(long = "memory", global = true)]
    pub memory: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            view: ViewArgs::default(),
        })
    }
}

/// Filters shared by the viewing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewArgs {
    /// Only bookmarked items
    #[arg(short = 'b', long = "bookmarks", conflicts_with = "folder")]
    pub bookmarks: bool,

    /// Only items in this folder
    #[arg(short = 'f', long = "folder", value_name = "ID")]
    pub folder: Option<String>,

    /// Only items in this category
    #[arg(short = 'c', long = "category", value_name = "NAME")]
    pub category: Option<String>,

    /// Case-insensitive match on name or character
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

impl ViewArgs {
    /// Build the view state these flags describe
    #[must_use]
    pub fn to_view_state(&self) -> ViewState {
        let mode = if self.bookmarks {
            ViewMode::Bookmarks
        } else if let Some(folder) = &self.folder {
            ViewMode::Folder(folder.clone())
        } else {
            ViewMode::All
        };

        let mut builder = ViewState::builder().mode(mode);
        if let Some(category) = &self.category {
            builder = builder.category(category.clone());
        }
        if let Some(search) = &self.search {
            builder = builder.search(search.clone());
        }
        builder.build()
    }
}

/// Item fields accepted by `item add` and `item edit`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemArgs {
    /// Item name (unique, case-insensitive)
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Character the figure depicts
    #[arg(long = "character")]
    pub character: Option<String>,

    /// Maker or shop
    #[arg(long = "source")]
    pub source: Option<String>,

    /// Link to the source
    #[arg(long = "source-url", value_name = "URL")]
    pub source_url: Option<String>,

    /// Category name; must be an existing category
    #[arg(short = 'c', long = "category")]
    pub category: Option<String>,

    /// Free-form notes
    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,

    /// Image view, repeatable (e.g. 정면=https://...)
    #[arg(short = 'a', long = "angle", value_name = "LABEL=URL")]
    pub angles: Vec<String>,

    /// Explicit thumbnail URL
    #[arg(long = "thumbnail", value_name = "URL")]
    pub thumbnail: Option<String>,
}

impl ItemArgs {
    /// Whether no field was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convert the flags into a draft
    ///
    /// # Errors
    ///
    /// Returns a message if an `--angle` value is not `LABEL=URL`.
    pub fn to_draft(&self) -> Result<ItemDraft, String> {
        let angles = self
            .angles
            .iter()
            .map(|arg| parse_angle(arg.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ItemDraft {
            name: self.name.clone(),
            character: self.character.clone(),
            source: self.source.clone(),
            source_url: self.source_url.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            angles: if angles.is_empty() { None } else { Some(angles) },
            thumbnail: self.thumbnail.clone(),
            is_locked: None,
        })
    }
}

fn parse_angle(arg: &str) -> Result<AngleImage, String> {
    let (label, url) = arg
        .split_once('=')
        .ok_or_else(|| format!("Invalid angle '{arg}'. Use LABEL=URL"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("Invalid angle '{arg}'. Label is empty"));
    }
    Ok(AngleImage::new(label, url.trim()))
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the items visible under the given filters
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show one item in detail
    Show {
        /// Item id
        #[arg(value_name = "ID")]
        id: String,

        /// Step to the next visible item (wraps around)
        #[arg(long = "next", conflicts_with = "prev")]
        next: bool,

        /// Step to the previous visible item (wraps around)
        #[arg(long = "prev")]
        prev: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Browse the catalog interactively
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Create, edit and delete items (admin mode)
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },

    /// Manage categories (admin mode)
    #[command(visible_alias = "cat")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Manage bookmark folders
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },

    /// Toggle the favorite mark on an item
    #[command(visible_alias = "favorite")]
    Fav {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Switch admin mode
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Navigation requested by `show --next/--prev`
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Show { next: true, .. } => Some(Direction::Next),
            Self::Show { prev: true, .. } => Some(Direction::Prev),
            _ => None,
        }
    }

    /// Whether the command runs without opening the catalog
    #[must_use]
    pub const fn is_standalone(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Completions { .. })
    }
}

/// Item subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ItemCommands {
    /// Create an item; prompts for fields when --name is missing
    Add {
        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Change fields of an unlocked item
    Edit {
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        fields: ItemArgs,
    },

    /// Delete an item (locked items included)
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Protect an item from edits
    Lock {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Allow edits again
    Unlock {
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Category subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CategoryCommands {
    /// List categories with usage counts
    #[command(visible_alias = "ls")]
    List,

    /// Add a category
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Rename a category and retag its items
    #[command(visible_alias = "mv")]
    Rename {
        #[arg(value_name = "OLD")]
        old: String,
        #[arg(value_name = "NEW")]
        new: String,
    },

    /// Delete a category (items keep the name)
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Folder subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FolderCommands {
    /// List folders
    #[command(visible_alias = "ls")]
    List,

    /// Create a folder
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Rename a folder
    #[command(visible_alias = "mv")]
    Rename {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a folder
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Put an item into a folder
    Put {
        #[arg(value_name = "ITEM")]
        item: String,
        #[arg(value_name = "FOLDER", default_value = crate::index::DEFAULT_FOLDER_ID)]
        folder: String,
    },

    /// Take an item out of a folder
    Pull {
        #[arg(value_name = "ITEM")]
        item: String,
        #[arg(value_name = "FOLDER", default_value = crate::index::DEFAULT_FOLDER_ID)]
        folder: String,
    },
}

/// Admin subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommands {
    /// Enable admin mode
    On,
    /// Disable admin mode
    Off,
    /// Print whether admin mode is on
    Status,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}
