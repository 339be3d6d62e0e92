//! Interactive prompts

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use super::ResolveError;

/// A source of answers for missing options
pub trait Prompter {
    fn text(&self, message: &str, default: Option<&str>) -> Result<String, ResolveError>;

    fn password(&self, message: &str) -> Result<String, ResolveError>;

    fn confirm(&self, message: &str, default: bool) -> Result<bool, ResolveError>;

    /// Returns the index of the chosen item
    fn select(&self, message: &str, items: &[String], default: usize)
        -> Result<usize, ResolveError>;
}

impl From<dialoguer::Error> for ResolveError {
    fn from(err: dialoguer::Error) -> Self {
        ResolveError::Prompt(err.to_string())
    }
}

/// Terminal prompts
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, message: &str, default: Option<&str>) -> Result<String, ResolveError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.allow_empty(default.is_none()).interact_text()?)
    }

    fn password(&self, message: &str) -> Result<String, ResolveError> {
        Ok(Password::with_theme(&self.theme)
            .with_prompt(message)
            .interact()?)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, ResolveError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn select(
        &self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, ResolveError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()?)
    }
}

/// Replays canned answers in order. Select answers are matched against the
/// item labels.
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    answers: std::cell::RefCell<std::collections::VecDeque<String>>,
    pub asked: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: std::cell::RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: std::cell::RefCell::new(Vec::new()),
        }
    }

    fn next(&self, message: &str) -> Result<String, ResolveError> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ResolveError::Prompt(format!("no scripted answer for {}", message)))
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn text(&self, message: &str, default: Option<&str>) -> Result<String, ResolveError> {
        let answer = self.next(message)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn password(&self, message: &str) -> Result<String, ResolveError> {
        self.next(message)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, ResolveError> {
        match self.next(message)?.as_str() {
            "" => Ok(default),
            answer => Ok(matches!(answer, "y" | "yes" | "true")),
        }
    }

    fn select(
        &self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, ResolveError> {
        let answer = self.next(message)?;
        if answer.is_empty() {
            return Ok(default);
        }
        items
            .iter()
            .position(|item| *item == answer)
            .ok_or_else(|| ResolveError::Prompt(format!("{} is not one of {:?}", answer, items)))
    }
}
