//! Catalog record types
//!
//! This module defines the records stored in the catalog and the draft type
//! used to create and edit them.
//!
//! # Types
//!
//! - **`Item`**: A catalog entry for one collectible figure
//! - **`AngleImage`**: One labeled image view belonging to an item
//! - **`ItemDraft`**: Partial item used for create and update requests
//!
//! Field names serialize in camelCase so stored catalogs stay readable by
//! other front ends that share the same key-value layout.

use serde::{Deserialize, Serialize};

/// Source recorded for items entered by hand
pub const DEFAULT_SOURCE: &str = "직접 등록";

/// Category assigned to new items when no category exists yet
pub const UNCATEGORIZED: &str = "미분류";

/// Thumbnail used when the first angle has no URL
pub const PLACEHOLDER_THUMBNAIL: &str = "https://picsum.photos/800/1000";

/// One labeled image view of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleImage {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

impl AngleImage {
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Whether this angle carries a usable image URL
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// A catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub angles: Vec<AngleImage>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub is_user_added: bool,
    #[serde(default)]
    pub is_locked: bool,
}

impl Item {
    /// Name normalized for uniqueness comparisons
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Whether the lower-cased name or character contains `needle`
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.character.to_lowercase().contains(needle)
    }
}

/// Trim and lower-case a name for duplicate detection
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Partial item used for create and update requests
///
/// Fields left as `None` are filled with defaults on create and preserved
/// from the existing item on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub character: Option<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub angles: Option<Vec<AngleImage>>,
    pub thumbnail: Option<String>,
    pub is_locked: Option<bool>,
}

impl ItemDraft {
    /// Start a draft with the given name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Fill unset fields the way the new-item form prefills them
    ///
    /// Source defaults to `default_source` and angles to an empty front and
    /// back slot. The category is left to the catalog, which picks the first
    /// one.
    #[must_use]
    pub fn with_form_defaults(mut self, default_source: &str) -> Self {
        if self.source.is_none() {
            self.source = Some(default_source.to_string());
        }
        if self.angles.as_ref().is_none_or(Vec::is_empty) {
            self.angles = Some(vec![AngleImage::new("정면", ""), AngleImage::new("뒷면", "")]);
        }
        self
    }

    #[must_use]
    pub fn character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn angle(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.angles
            .get_or_insert_with(Vec::new)
            .push(AngleImage::new(label, url));
        self
    }

    /// Apply the draft over an existing item, keeping unset fields
    pub(crate) fn merge_into(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(character) = self.character {
            item.character = character;
        }
        if let Some(source) = self.source {
            item.source = source;
        }
        if let Some(source_url) = self.source_url {
            item.source_url = (!source_url.is_empty()).then_some(source_url);
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(angles) = self.angles {
            item.angles = angles;
        }
        if let Some(thumbnail) = self.thumbnail {
            item.thumbnail = thumbnail;
        }
        if let Some(is_locked) = self.is_locked {
            item.is_locked = is_locked;
        }
    }
}
