//! # Data Structures and Sequences
//!
//! Examples for Chapter 8: strings, lists, tuples, sets, dictionaries and
//! the ways of looping over them, followed by review questions and
//! practice exercises with worked solutions.
//!
//! ## Sections Covered
//!
//! 1. **Strings** (8.1)
//!    - Case transformations: capitalize, upper case, swapped case
//!    - Formatting: interpolation, alignment, fixed precision
//!
//! 2. **Lists** (8.2)
//!    - push, insert, pop on a `Vec`
//!
//! 3. **Tuples** (8.3)
//!    - Nesting and destructuring
//!
//! 4. **Sets** (8.4)
//!    - Union, intersection, difference, symmetric difference
//!
//! 5. **Dictionaries** (8.5)
//!    - Insert, get, remove with insertion order preserved
//!
//! 6. **Iteration** (8.6)
//!    - enumerate, map entries, zip
//!
//! 7. **Review and exercises** (8.8)
//!    - Questions, true/false statements, nine practice exercises
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin chapter_08
//! cargo run --bin chapter_08 -- --section sets --section dicts
//! cargo run --bin chapter_08 -- --section exercises --seed 42
//! cargo run --bin chapter_08 -- --interactive
//! cargo run --bin chapter_08 -- --section quiz --quiz
//! ```

pub mod chapter;
pub mod config;
pub mod dicts;
pub mod error;
pub mod exercises;
pub mod iteration;
pub mod lists;
pub mod prompt;
pub mod quiz;
pub mod sets;
pub mod strings;
pub mod tuples;

pub use chapter::{run_section, Section};
pub use config::ChapterConfig;
pub use error::{ChapterError, Result};
