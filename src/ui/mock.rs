//! Scripted user input for testing

use super::input::{InputError, Result, UserInput};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One canned answer
#[derive(Debug, Clone)]
enum Answer {
    Text(String),
    Confirm(bool),
    Select(usize),
}

/// User input that replays predetermined answers in order
///
/// An exhausted script behaves like the user pressing ESC. Asking for a
/// different kind of answer than the next one queued is an error.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.answers.borrow_mut().push_back(Answer::Text(value.into()));
        self
    }

    #[must_use]
    pub fn confirm(self, value: bool) -> Self {
        self.answers.borrow_mut().push_back(Answer::Confirm(value));
        self
    }

    #[must_use]
    pub fn select(self, index: usize) -> Self {
        self.answers.borrow_mut().push_back(Answer::Select(index));
        self
    }

    /// Every prompt shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Option<Answer> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front()
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        match self.next(prompt) {
            Some(Answer::Text(value)) if value.is_empty() => Ok(default.map(ToString::to_string).or(Some(value))),
            Some(Answer::Text(value)) => Ok(Some(value)),
            Some(other) => Err(InputError::Invalid(format!("expected text for '{prompt}', got {other:?}"))),
            None => Ok(None),
        }
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt) {
            Some(Answer::Confirm(value)) => Ok(Some(value)),
            Some(other) => Err(InputError::Invalid(format!("expected confirm for '{prompt}', got {other:?}"))),
            None => Ok(None),
        }
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        match self.next(prompt) {
            Some(Answer::Select(index)) if index < items.len() => Ok(Some(index)),
            Some(Answer::Select(index)) => Err(InputError::Invalid(format!(
                "index {index} out of range for '{prompt}'"
            ))),
            Some(other) => Err(InputError::Invalid(format!("expected select for '{prompt}', got {other:?}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_in_order() {
        let input = ScriptedInput::new().text("Rei").confirm(true).select(1);
        let items = vec!["a".to_string(), "b".to_string()];

        assert_eq!(input.prompt_text("Name", None, false).unwrap(), Some("Rei".into()));
        assert_eq!(input.prompt_confirm("Sure?", false).unwrap(), Some(true));
        assert_eq!(input.prompt_select("Pick", &items, None).unwrap(), Some(1));
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.prompts(), vec!["Name", "Sure?", "Pick"]);
    }

    #[test]
    fn test_empty_text_takes_default() {
        let input = ScriptedInput::new().text("");
        assert_eq!(
            input.prompt_text("Source", Some("직접 등록"), true).unwrap(),
            Some("직접 등록".into())
        );
    }

    #[test]
    fn test_exhausted_is_cancel() {
        let input = ScriptedInput::new();
        assert_eq!(input.prompt_confirm("Sure?", true).unwrap(), None);
    }

    #[test]
    fn test_wrong_kind_is_error() {
        let input = ScriptedInput::new().confirm(true);
        assert!(matches!(
            input.prompt_text("Name", None, false),
            Err(InputError::Invalid(_))
        ));
    }
}
