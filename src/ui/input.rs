//! Prompts used by the interactive commands
//!
//! Every prompt answers `Ok(None)` when the user backs out with ESC, so the
//! browse loop and the item form can treat "cancel" separately from a failed
//! terminal read.

use crate::session::ConfirmGate;
use std::io;
use tracing::warn;

/// Source of answers for the interactive commands
///
/// ```no_run
/// use figdex::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let name = input.prompt_text("Item name", None, false).unwrap();
/// let remove = input.prompt_confirm("Delete 'Rei'?", false).unwrap() == Some(true);
/// # let _ = (name, remove);
/// ```
pub trait UserInput {
    /// Free text; `default` is returned when the user just presses enter
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Yes/no question
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Pick one of `items`, answering with its index
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    /// A required answer was skipped
    #[error("Cancelled")]
    Cancelled,

    #[error("Invalid answer: {0}")]
    Invalid(String),
}

/// Terminal prompts with the colorful dialoguer theme
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input
            .interact_text()
            .map(Some)
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

/// Confirmation gate that asks through a [`UserInput`]
///
/// Cancelling or a failed prompt counts as "no".
pub struct PromptGate<'a> {
    input: &'a dyn UserInput,
}

impl<'a> PromptGate<'a> {
    #[must_use]
    pub fn new(input: &'a dyn UserInput) -> Self {
        Self { input }
    }
}

impl ConfirmGate for PromptGate<'_> {
    fn confirm(&self, prompt: &str) -> bool {
        match self.input.prompt_confirm(prompt, false) {
            Ok(answer) => answer.unwrap_or(false),
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}
