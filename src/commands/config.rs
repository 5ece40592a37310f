//! Config command - read and change settings

use super::Result;
use crate::FigdexError;
use crate::cli::ConfigCommands;
use crate::config::{FigdexConfig, KEYS};
use crate::ui::OutputWriter;
use std::path::Path;

/// Execute a config subcommand, saving changes to `config_path`
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed `KEY=VALUE` or an unknown key, and
/// `ConfigError` if the value cannot be parsed or the file cannot be written.
pub fn execute(
    config: &mut FigdexConfig,
    config_path: &Path,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                FigdexError::InvalidInput("Invalid format. Use: figdex config set key=value".into())
            })?;
            let key = key.trim();
            let value = value.trim();

            check_key(key)?;
            config.set(key, value)?;
            config.save_to(config_path)?;
            if !quiet {
                output.success(&format!("Set {key} = {value}"));
            }
        }
        ConfigCommands::Get { key } => {
            check_key(key)?;
            output.write(&config.get(key)?);
        }
    }
    Ok(())
}

fn check_key(key: &str) -> Result<()> {
    if KEYS.contains(&key) {
        Ok(())
    } else {
        Err(FigdexError::InvalidInput(format!(
            "Unknown configuration key: '{key}'. Available keys: {}",
            KEYS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{BufferedWriter, MessageLevel};
    use tempfile::TempDir;

    #[test]
    fn test_set_saves_and_get_reads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = FigdexConfig::default();
        let output = BufferedWriter::new();

        let set = ConfigCommands::Set { setting: "default_source = Shop".into() };
        execute(&mut config, &path, &set, &output, false).unwrap();
        assert_eq!(FigdexConfig::from_file(&path).unwrap().default_source, "Shop");

        let get = ConfigCommands::Get { key: "default_source".into() };
        execute(&mut config, &path, &get, &output, true).unwrap();
        assert_eq!(output.at(MessageLevel::Normal), vec!["Shop"]);
    }

    #[test]
    fn test_malformed_setting() {
        let dir = TempDir::new().unwrap();
        let mut config = FigdexConfig::default();
        let output = BufferedWriter::new();

        let set = ConfigCommands::Set { setting: "quiet".into() };
        let result = execute(&mut config, &dir.path().join("c.toml"), &set, &output, false);
        assert!(matches!(result, Err(FigdexError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_key() {
        let dir = TempDir::new().unwrap();
        let mut config = FigdexConfig::default();
        let output = BufferedWriter::new();

        let get = ConfigCommands::Get { key: "colour".into() };
        let result = execute(&mut config, &dir.path().join("c.toml"), &get, &output, false);
        assert!(matches!(result, Err(FigdexError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_value_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = FigdexConfig::default();
        let output = BufferedWriter::new();

        let set = ConfigCommands::Set { setting: "quiet=maybe".into() };
        assert!(matches!(
            execute(&mut config, &path, &set, &output, false),
            Err(FigdexError::ConfigError(_))
        ));
        assert!(!path.exists());
    }
}
