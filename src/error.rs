use std::io;
use thiserror::Error;

/// Errors raised by the chapter demonstrations and exercises.
#[derive(Error, Debug)]
pub enum ChapterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid range: values must lie in 1..={max}, and {max} leaves it empty")]
    InvalidRange { max: u32 },

    #[error("Element {index} ('{value}') is not a number")]
    NonNumeric { index: usize, value: String },

    #[error("Product overflowed after multiplying element {index}")]
    Overflow { index: usize },

    #[error("Invalid answer '{0}': expected true/false (t/f, yes/no)")]
    InvalidAnswer(String),

    #[error("Input ended while reading {0}")]
    UnexpectedEof(String),

    #[error("Unknown section '{0}'")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, ChapterError>;
