//! Confirmation gate for destructive operations
//!
//! Deleting an item, a folder or a category only happens after the gate
//! says yes. The session asks exactly once per operation and leaves state
//! untouched when the answer is no.

/// Decides whether a destructive operation may proceed
pub trait ConfirmGate {
    /// Ask for confirmation with a human-readable prompt
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that approves everything (scripted or `--yes` use)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmGate for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

impl<F> ConfirmGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
