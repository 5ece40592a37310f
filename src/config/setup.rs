//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts for creating an initial configuration
//! when figdex is run for the first time.

use super::FigdexConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the catalog location and the
/// default item source
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system data directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<FigdexConfig, ConfigError> {
    println!("Welcome to figdex! Let's set up your catalog.\n");

    let default_path = FigdexConfig::default_database_path()?;
    let db_path_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog location")
        .default(default_path.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = FigdexConfig::default();
    let default_source: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Default source for new items")
        .default(config.default_source.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let db_path = PathBuf::from(db_path_str);
    if db_path != default_path {
        config.database = Some(db_path);
    }
    config.default_source = default_source;

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
