//! Line-oriented prompting over any reader/writer pair, so interactive
//! flows can be driven from stdin or from a `Cursor` in tests.

use crate::error::{ChapterError, Result};
use std::io::{BufRead, Write};

/// Write `prompt`, then read one line without its line ending.
/// End of input is an error naming the prompt.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, prompts: &mut W, prompt: &str) -> Result<String> {
    write!(prompts, "{}", prompt)?;
    prompts.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ChapterError::UnexpectedEof(
            prompt.trim_end_matches([':', ' ']).to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_line_at_a_time() {
        let mut input = Cursor::new("first\r\nsecond\n");
        let mut prompts = Vec::new();

        assert_eq!(prompt_line(&mut input, &mut prompts, "A: ").unwrap(), "first");
        assert_eq!(prompt_line(&mut input, &mut prompts, "B: ").unwrap(), "second");
        assert_eq!(String::from_utf8(prompts).unwrap(), "A: B: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("tail");
        assert_eq!(prompt_line(&mut input, &mut Vec::new(), "> ").unwrap(), "tail");
    }

    #[test]
    fn test_end_of_input() {
        let err = prompt_line(&mut Cursor::new(""), &mut Vec::new(), "Enter name 1: ").unwrap_err();
        assert!(matches!(err, ChapterError::UnexpectedEof(ref what) if what == "Enter name 1"));
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        assert_eq!(prompt_line(&mut Cursor::new("\n"), &mut Vec::new(), "> ").unwrap(), "");
    }
}
