//! Interactive prompts
//!
//! Everything that waits for the operator goes through [`Prompter`], so the
//! selection and directory logic can be driven by scripted answers in tests.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::Result;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::{Answer, ScriptedPrompter};

/// Validation hook for free-text answers; `Err` carries the message shown
/// to the operator before asking again.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// Source of operator answers
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Ask for free text, re-asking until `validate` accepts it.
    fn input(&self, message: &str, validate: Validator) -> Result<String>;

    /// Let the operator tick any subset of `items`; returns the chosen indices.
    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>>;
}

/// Terminal prompts rendered with dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn input(&self, message: &str, validate: Validator) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|answer: &String| validate(answer.as_str()))
            .interact_text()?)
    }

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>> {
        Ok(MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .interact()?)
    }
}
