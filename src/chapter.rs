//! Sections of the chapter, in reading order, and the narration that
//! introduces each one.

use crate::config::ChapterConfig;
use crate::error::{ChapterError, Result};
use crate::{dicts, exercises, iteration, lists, quiz, sets, strings, tuples};
use rand::Rng;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Strings,
    Lists,
    Tuples,
    Sets,
    Dicts,
    Iteration,
    Summary,
    Quiz,
    Exercises,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Strings,
        Section::Lists,
        Section::Tuples,
        Section::Sets,
        Section::Dicts,
        Section::Iteration,
        Section::Summary,
        Section::Quiz,
        Section::Exercises,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Strings => "strings",
            Section::Lists => "lists",
            Section::Tuples => "tuples",
            Section::Sets => "sets",
            Section::Dicts => "dicts",
            Section::Iteration => "iteration",
            Section::Summary => "summary",
            Section::Quiz => "quiz",
            Section::Exercises => "exercises",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Strings => "8.1 Strings",
            Section::Lists => "8.2 Lists",
            Section::Tuples => "8.3 Tuples",
            Section::Sets => "8.4 Sets",
            Section::Dicts => "8.5 Dictionaries",
            Section::Iteration => "8.6 Looping over sequences",
            Section::Summary => "8.7 Summary",
            Section::Quiz => "8.8 Review",
            Section::Exercises => "8.8.3 Practice exercises",
        }
    }

    /// Bullet points shown under the section title.
    pub fn key_points(self) -> &'static [&'static str] {
        match self {
            Section::Strings => &[
                "A String owns UTF-8 text; &str borrows it",
                "Case methods return a new String",
                "format! handles interpolation, alignment and precision",
            ],
            Section::Lists => &["Ordered", "Mutable", "Iterable"],
            Section::Tuples => &[
                "Fixed size",
                "Ordered",
                "Each position may have its own type",
            ],
            Section::Sets => &[
                "Elements are unique",
                "No indexing",
                "Union, intersection, difference, symmetric difference",
            ],
            Section::Dicts => &["Key/value pairs", "Keys are unique", "Mutable"],
            Section::Iteration => &[
                "enumerate() pairs each item with its index",
                "Maps iterate as (key, value) pairs",
                "zip() walks two sequences together",
            ],
            Section::Summary => &[],
            Section::Quiz => &[],
            Section::Exercises => &[],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = ChapterError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| ChapterError::UnknownSection(s.to_string()))
    }
}

const SUMMARY: [&str; 7] = [
    "The core data structures and their Rust counterparts",
    "String operations and formatting",
    "Lists (Vec) and their methods",
    "Tuples and destructuring",
    "Set operations",
    "Dictionaries (maps)",
    "Ways of looping over sequences",
];

/// Print the body of one section (demonstrations, not the heading).
pub fn run_section(
    section: Section,
    out: &mut impl Write,
    config: &ChapterConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    for point in section.key_points() {
        writeln!(out, "- {}", point)?;
    }
    if !section.key_points().is_empty() {
        writeln!(out)?;
    }

    match section {
        Section::Strings => {
            strings::demonstrate_string_methods("python example", out)?;
            writeln!(out)?;
            strings::show_string_formatting(out)?;
            writeln!(out)?;
            strings::demonstrate_repetition(out)?;
        }
        Section::Lists => lists::demonstrate_list_operations(out)?,
        Section::Tuples => tuples::demonstrate_tuple_usage(out)?,
        Section::Sets => {
            sets::demonstrate_set_operations(out)?;
            writeln!(out)?;
            sets::demonstrate_unique_chars(out)?;
        }
        Section::Dicts => dicts::demonstrate_dict_operations(out)?,
        Section::Iteration => iteration::demonstrate_iterations(out)?,
        Section::Summary => {
            writeln!(out, "This chapter covered:")?;
            for line in SUMMARY {
                writeln!(out, "- {}", line)?;
            }
        }
        Section::Quiz => {
            writeln!(out, "Questions and answers")?;
            quiz::print_review_questions(out)?;
            writeln!(out, "\nTrue or false")?;
            quiz::print_true_false(out)?;
        }
        Section::Exercises => exercises::run_exercises(out, config, rng)?,
    }
    Ok(())
}
