//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive line-oriented prompts
//! - [`output`] - Output formatting and display

pub mod output;
pub mod prompts;

pub use output::Verbosity;
pub use prompts::PromptError;
