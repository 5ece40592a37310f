//! UI abstraction layer
//!
//! Commands never talk to the terminal directly: prompts go through
//! [`UserInput`] and messages through [`OutputWriter`].
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      commands (list, item, browse...)   │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   UserInput / OutputWriter / PromptGate │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ DialoguerInput│  │ BufferedWriter    │
//! │ StdoutWriter  │  │ (captured output) │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod input;
pub mod output;

#[cfg(test)]
pub mod mock;

pub use input::{DialoguerInput, InputError, PromptGate, UserInput};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
