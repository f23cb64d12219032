//! Exercise parameters, loaded from an optional TOML file.
//!
//! ```toml
//! random_size = 50
//! random_max = 25
//! targets = [11, 18, 20]
//! phone_book_entries = 10
//! seed = 42
//! ```

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChapterConfig {
    /// How many numbers the random list holds (exercise 2).
    pub random_size: usize,
    /// Upper bound (inclusive) of each random number.
    pub random_max: u32,
    /// Numbers searched for in exercise 3.
    pub targets: Vec<u32>,
    /// How many name/phone pairs the interactive phone book asks for.
    pub phone_book_entries: usize,
    /// Fixed RNG seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            random_size: 50,
            random_max: 25,
            targets: vec![11, 18, 20],
            phone_book_entries: 10,
            seed: None,
        }
    }
}

impl ChapterConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        info!(path = %path.display(), ?config, "loaded chapter config");
        Ok(config)
    }
}
