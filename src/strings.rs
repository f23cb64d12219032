//! 8.1 Strings
//!
//! A `String` owns its UTF-8 buffer; every case transformation below
//! allocates a new one and leaves the input untouched.

use std::io::Write;

/// Upper-case the first character, lower-case the rest.
///
/// The first character goes through full upper-case mapping, not title
/// case: `"ß"` becomes `"SS"` and `"ǆ"` becomes `"Ǆ"` (title case would
/// give `"Ss"` and `"ǅ"`).
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Full Unicode upper-case mapping of `text`.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Flip the case of every cased character.
pub fn swap_case(text: &str) -> String {
    let mut swapped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            swapped.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            swapped.extend(c.to_uppercase());
        } else {
            swapped.push(c);
        }
    }
    swapped
}

/// `"ha"` repeated 3 times is `"hahaha"`.
pub fn repeat(text: &str, times: usize) -> String {
    text.repeat(times)
}

pub fn demonstrate_string_methods(text: &str, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Original: {}", text)?;
    writeln!(out, "Capitalized: {}", capitalize(text))?;
    writeln!(out, "Upper case: {}", to_upper(text))?;
    writeln!(out, "Swapped case: {}", swap_case(text))?;
    Ok(())
}

pub fn demonstrate_repetition(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\"ha\" repeated 3 times: {}", repeat("ha", 3))?;
    writeln!(out, "\"-\" repeated 10 times: {}", repeat("-", 10))?;
    Ok(())
}

pub fn show_string_formatting(out: &mut impl Write) -> std::io::Result<()> {
    let name = "Python";
    let version = 3.9;

    writeln!(out, "Language {} version {}", name, version)?;

    // Alignment within a 10-character field
    writeln!(out, "{:>10}", name)?;
    writeln!(out, "{:<10}", name)?;
    writeln!(out, "{:^10}", name)?;

    writeln!(out, "{:.2}", version)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("python example"), "Python example");
        assert_eq!(capitalize("PYTHON"), "Python");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_capitalize_uses_upper_case_not_title_case() {
        assert_eq!(capitalize("ßtraße"), "SStraße");
        assert_eq!(capitalize("ǆungla"), "Ǆungla");
    }

    #[test]
    fn test_swap_case() {
        assert_eq!(swap_case("python example"), "PYTHON EXAMPLE");
        assert_eq!(swap_case("PyThOn 3"), "pYtHoN 3");
        assert_eq!(swap_case(""), "");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("ha", 3), "hahaha");
        assert_eq!(repeat("ha", 0), "");
    }

    #[test]
    fn test_demonstrate_string_methods_output() {
        let mut out = Vec::new();
        demonstrate_string_methods("python example", &mut out).unwrap();
        let expected = "\
Original: python example
Capitalized: Python example
Upper case: PYTHON EXAMPLE
Swapped case: PYTHON EXAMPLE
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_repetition_output() {
        let mut out = Vec::new();
        demonstrate_repetition(&mut out).unwrap();
        let expected = "\
\"ha\" repeated 3 times: hahaha
\"-\" repeated 10 times: ----------
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_string_formatting_output() {
        let mut out = Vec::new();
        show_string_formatting(&mut out).unwrap();
        let lines: Vec<_> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(
            lines,
            vec![
                "Language Python version 3.9",
                "    Python",
                "Python    ",
                "  Python  ",
                "3.90",
            ]
        );
    }
}
