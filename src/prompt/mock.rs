//! Scripted prompter for testing

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{Prompter, Validator};
use crate::error::{Error, Result};

/// One pre-recorded operator answer
#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Input(String),
    Select(Vec<usize>),
}

/// Replays answers in order and records every question asked.
///
/// Free-text answers rejected by the validator are skipped, the same way a
/// terminal would ask again, so scripts can exercise validation.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
    rejections: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            ..Self::default()
        }
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Validation messages produced for rejected input answers
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }

    fn next(&self, message: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("no scripted answer for '{}'", message)))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(Error::Prompt(format!("expected confirm, got {:?}", other))),
        }
    }

    fn input(&self, message: &str, validate: Validator) -> Result<String> {
        loop {
            match self.next(message)? {
                Answer::Input(value) => match validate(&value) {
                    Ok(()) => return Ok(value),
                    Err(reason) => self.rejections.borrow_mut().push(reason),
                },
                other => return Err(Error::Prompt(format!("expected input, got {:?}", other))),
            }
        }
    }

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>> {
        match self.next(message)? {
            Answer::Select(indices) => {
                if let Some(bad) = indices.iter().find(|&&i| i >= items.len()) {
                    return Err(Error::Prompt(format!("index {} out of range", bad)));
                }
                Ok(indices)
            }
            other => Err(Error::Prompt(format!("expected select, got {:?}", other))),
        }
    }
}
