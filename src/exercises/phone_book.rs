//! Exercise 7: a phone book filled from interactive input.

use crate::error::Result;
use crate::prompt::prompt_line;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::debug;

pub const NOT_FOUND: &str = "Number not found";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PhoneBook {
    entries: BTreeMap<String, String>,
}

impl PhoneBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous number for `name`.
    pub fn insert(&mut self, name: impl Into<String>, phone: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), phone.into())
    }

    pub fn find(&self, name: &str) -> &str {
        self.entries.get(name).map(String::as_str).unwrap_or(NOT_FOUND)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prompt for `entries` name/phone pairs on `prompts`, reading answers
    /// line by line from `input`.
    pub fn read_interactive<R: BufRead, W: Write>(
        entries: usize,
        input: &mut R,
        prompts: &mut W,
    ) -> Result<Self> {
        let mut book = Self::new();
        for i in 1..=entries {
            let name = prompt_line(input, prompts, &format!("Enter name {}: ", i))?;
            let phone = prompt_line(input, prompts, &format!("Enter phone {}: ", i))?;
            if let Some(old) = book.insert(name.clone(), phone) {
                debug!(%name, %old, "overwrote phone book entry");
            }
        }
        debug!(entries = book.len(), "phone book filled");
        Ok(book)
    }

    /// Ask for one name and return its number (or [`NOT_FOUND`]).
    pub fn lookup_interactive<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        prompts: &mut W,
    ) -> Result<&str> {
        let name = prompt_line(input, prompts, "Name to look up: ")?;
        Ok(self.find(name.trim()))
    }
}
