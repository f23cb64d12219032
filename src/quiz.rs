//! 8.8.1 Review questions and 8.8.2 true/false statements.

use crate::error::{ChapterError, Result};
use crate::prompt::prompt_line;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ReviewQuestion {
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct TrueFalse {
    pub statement: &'static str,
    pub answer: bool,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

pub const REVIEW_QUESTIONS: [ReviewQuestion; 9] = [
    ReviewQuestion {
        question: "How do numbers differ from strings? Are they interchangeable?",
        answer: &[
            "Numbers are values for arithmetic; strings are sequences of characters",
            "They are not interchangeable, but convert with to_string() and str::parse()",
        ],
    },
    ReviewQuestion {
        question: "How does inline string formatting work?",
        answer: &[
            "format!/println! take {} placeholders, and {name} captures a variable in scope",
            "Format specs after ':' control width, alignment and precision",
        ],
    },
    ReviewQuestion {
        question: "What can a list hold?",
        answer: &[
            "A Vec<T> holds any single type T: numbers, strings, other collections, structs",
            "Mixing kinds needs an enum (or a dynamic value such as serde_json::Value)",
        ],
    },
    ReviewQuestion {
        question: "What does println!(\"let's get back to work\") print?",
        answer: &[
            "let's get back to work",
            "A single quote needs no escaping inside a double-quoted literal",
        ],
    },
    ReviewQuestion {
        question: "Lists are mutable and tuples are not. How does that shape their use?",
        answer: &[
            "Lists suit data that grows or changes while the program runs",
            "Tuples suit fixed groupings; they can be hash-map keys when their parts are hashable",
        ],
    },
    ReviewQuestion {
        question: "What are list comprehensions equivalent to, and why use them?",
        answer: &[
            "A for loop with an optional if, pushing into a collection",
            "In Rust: iterator chains such as (0..10).map(|x| x * x).collect()",
        ],
    },
    ReviewQuestion {
        question: "Tuples are ordered and sets are not. What follows from that?",
        answer: &[
            "Tuple elements are reached by position and may repeat",
            "Set elements are unique, have no index, and are fast to test for membership",
        ],
    },
    ReviewQuestion {
        question: "Which type stores the unique elements of a text or collection?",
        answer: &[
            "A set: \"hello hello world\".chars().collect::<BTreeSet<_>>()",
            "Useful for removing duplicates, counting distinct items and membership tests",
        ],
    },
    ReviewQuestion {
        question: "Are dictionaries iterable?",
        answer: &[
            "Yes: over keys(), values(), or (key, value) pairs",
        ],
    },
];

pub const TRUE_FALSE: [TrueFalse; 10] = [
    TrueFalse {
        statement: "A string method changes the string in place, in the same memory",
        answer: false,
        explanation: "Case methods return a new String",
    },
    TrueFalse {
        statement: "Repeating a string a number of times returns a longer string",
        answer: true,
        explanation: "\"ha\".repeat(3) == \"hahaha\"",
    },
    TrueFalse {
        statement: "Strings differ depending on the quotes used to write them",
        answer: false,
        explanation: "\"text\" and r\"text\" are the same string",
    },
    TrueFalse {
        statement: "Indexing works on strings and lists but not on sets",
        answer: true,
        explanation: "Sets have no positions to index",
    },
    TrueFalse {
        statement: "A list can only hold one type of data",
        answer: true,
        explanation: "A Vec<T> holds one T; an enum wraps several kinds",
    },
    TrueFalse {
        statement: "A new value cannot be inserted into a tuple",
        answer: true,
        explanation: "A tuple's arity is part of its type",
    },
    TrueFalse {
        statement: "Iterator chains are an elegant way to build lists",
        answer: true,
        explanation: "map/filter/collect read top to bottom",
    },
    TrueFalse {
        statement: "A tuple can hold different types of data",
        answer: true,
        explanation: "(\"Anna\", 20, 4.5) is a (&str, i32, f64)",
    },
    TrueFalse {
        statement: "Tuples use parentheses ( ) and lists use square brackets [ ]",
        answer: true,
        explanation: "(1, 2) versus vec![1, 2]",
    },
    TrueFalse {
        statement: "A dictionary may have a different number of keys and values",
        answer: false,
        explanation: "Every key has exactly one value",
    },
];

/// Accepts t/true/y/yes and f/false/n/no, case-insensitively.
pub fn parse_answer(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "t" | "true" | "y" | "yes" => Ok(true),
        "f" | "false" | "n" | "no" => Ok(false),
        _ => Err(ChapterError::InvalidAnswer(input.trim().to_string())),
    }
}

/// Score `answers` against the key. Missing answers count as wrong.
pub fn grade_true_false(answers: &[bool]) -> QuizScore {
    let correct = TRUE_FALSE
        .iter()
        .zip(answers)
        .filter(|(item, given)| item.answer == **given)
        .count();
    QuizScore { correct, total: TRUE_FALSE.len() }
}

/// Ask every true/false statement on `prompts`, re-asking until the answer
/// parses, then print and return the score.
pub fn take_true_false<R: BufRead, W: Write>(input: &mut R, prompts: &mut W) -> Result<QuizScore> {
    let mut answers = Vec::with_capacity(TRUE_FALSE.len());
    for (i, item) in TRUE_FALSE.iter().enumerate() {
        writeln!(prompts, "{}. {}", i + 1, item.statement)?;
        loop {
            let raw = prompt_line(input, prompts, "True or false? ")?;
            match parse_answer(&raw) {
                Ok(answer) => {
                    answers.push(answer);
                    break;
                }
                Err(e) => {
                    debug!(%raw, "rejected answer");
                    writeln!(prompts, "{}", e)?;
                }
            }
        }
    }

    let score = grade_true_false(&answers);
    writeln!(prompts, "Score: {}/{}", score.correct, score.total)?;
    Ok(score)
}

pub fn print_review_questions(out: &mut impl Write) -> std::io::Result<()> {
    for (i, item) in REVIEW_QUESTIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item.question)?;
        for line in item.answer {
            writeln!(out, "   - {}", line)?;
        }
    }
    Ok(())
}

pub fn print_true_false(out: &mut impl Write) -> std::io::Result<()> {
    for (i, item) in TRUE_FALSE.iter().enumerate() {
        let verdict = if item.answer { "True" } else { "False" };
        writeln!(out, "{}. {}", i + 1, item.statement)?;
        writeln!(out, "   - {}: {}", verdict, item.explanation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert!(parse_answer("T").unwrap());
        assert!(parse_answer("  yes \n").unwrap());
        assert!(!parse_answer("False").unwrap());
        assert!(!parse_answer("n").unwrap());
        assert!(matches!(
            parse_answer("maybe"),
            Err(ChapterError::InvalidAnswer(s)) if s == "maybe"
        ));
    }

    #[test]
    fn test_perfect_score() {
        let key: Vec<bool> = TRUE_FALSE.iter().map(|item| item.answer).collect();
        assert_eq!(grade_true_false(&key), QuizScore { correct: 10, total: 10 });
    }

    #[test]
    fn test_missing_answers_count_as_wrong() {
        // First three answers: false, true, false
        let score = grade_true_false(&[false, true, false]);
        assert_eq!(score, QuizScore { correct: 3, total: 10 });

        assert_eq!(grade_true_false(&[]).correct, 0);
    }

    #[test]
    fn test_extra_answers_ignored() {
        let mut answers: Vec<bool> = TRUE_FALSE.iter().map(|item| !item.answer).collect();
        answers.extend([true, true, true]);
        assert_eq!(grade_true_false(&answers).correct, 0);
    }

    #[test]
    fn test_print_review_questions_numbered() {
        let mut out = Vec::new();
        print_review_questions(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("1. How do numbers differ"));
        assert!(text.contains("\n9. Are dictionaries iterable?\n"));
    }

    #[test]
    fn test_print_true_false_verdicts() {
        let mut out = Vec::new();
        print_true_false(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 20);
        assert!(text.contains("   - True: \"ha\".repeat(3) == \"hahaha\""));
    }

    #[test]
    fn test_take_true_false_scores_answers() {
        let key: String = TRUE_FALSE
            .iter()
            .map(|item| if item.answer { "t\n" } else { "f\n" })
            .collect();
        let mut prompts = Vec::new();

        let score = take_true_false(&mut std::io::Cursor::new(key), &mut prompts).unwrap();

        assert_eq!(score, QuizScore { correct: 10, total: 10 });
        let text = String::from_utf8(prompts).unwrap();
        assert!(text.starts_with("1. A string method changes the string in place"));
        assert!(text.ends_with("Score: 10/10\n"));
    }

    #[test]
    fn test_take_true_false_asks_again_on_bad_answer() {
        // "maybe" is rejected, then every statement is answered "yes"
        let input = format!("maybe\n{}", "yes\n".repeat(10));
        let mut prompts = Vec::new();

        let score = take_true_false(&mut std::io::Cursor::new(input), &mut prompts).unwrap();

        assert_eq!(score, QuizScore { correct: 7, total: 10 });
        let text = String::from_utf8(prompts).unwrap();
        assert!(text.contains("Invalid answer 'maybe'"));
        assert_eq!(text.matches("True or false? ").count(), 11);
    }

    #[test]
    fn test_take_true_false_stops_at_end_of_input() {
        let err = take_true_false(&mut std::io::Cursor::new("t\nf\n"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ChapterError::UnexpectedEof(ref what) if what == "True or false?"));
    }
}
