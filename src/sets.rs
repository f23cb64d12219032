//! 8.4 Sets
//!
//! Unique elements with the mathematical set operations. `BTreeSet` keeps
//! elements sorted, so printed output is stable from run to run.

use std::collections::BTreeSet;
use std::io::Write;

pub fn union<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a | b
}

pub fn intersection<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a & b
}

pub fn difference<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a - b
}

pub fn symmetric_difference<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a ^ b
}

/// Distinct characters of `text`, space included.
pub fn unique_chars(text: &str) -> BTreeSet<char> {
    text.chars().collect()
}

pub fn demonstrate_set_operations(out: &mut impl Write) -> std::io::Result<()> {
    let set_a: BTreeSet<i32> = [1, 2, 3, 4, 5].into();
    let set_b: BTreeSet<i32> = [4, 5, 6, 7, 8].into();

    writeln!(out, "Union: {:?}", union(&set_a, &set_b))?;
    writeln!(out, "Intersection: {:?}", intersection(&set_a, &set_b))?;
    writeln!(out, "Difference A-B: {:?}", difference(&set_a, &set_b))?;
    writeln!(out, "Symmetric difference: {:?}", symmetric_difference(&set_a, &set_b))?;
    Ok(())
}

pub fn demonstrate_unique_chars(out: &mut impl Write) -> std::io::Result<()> {
    let text = "hello hello world";
    let letters = unique_chars(text);
    writeln!(out, "Unique characters of {:?}: {:?}", text, letters)?;
    writeln!(out, "{} distinct out of {}", letters.len(), text.chars().count())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[i32]) -> BTreeSet<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_operations() {
        let a = set(&[1, 2, 3, 4, 5]);
        let b = set(&[4, 5, 6, 7, 8]);

        assert_eq!(union(&a, &b), set(&[1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(intersection(&a, &b), set(&[4, 5]));
        assert_eq!(difference(&a, &b), set(&[1, 2, 3]));
        assert_eq!(difference(&b, &a), set(&[6, 7, 8]));
        assert_eq!(symmetric_difference(&a, &b), set(&[1, 2, 3, 6, 7, 8]));
    }

    #[test]
    fn test_operations_leave_inputs_alone() {
        let a = set(&[1, 2]);
        let b = set(&[2, 3]);
        let _ = union(&a, &b);
        let _ = symmetric_difference(&a, &b);
        assert_eq!(a, set(&[1, 2]));
        assert_eq!(b, set(&[2, 3]));
    }

    #[test]
    fn test_operations_with_empty_set() {
        let a = set(&[1, 2]);
        let empty = BTreeSet::new();
        assert_eq!(union(&a, &empty), a);
        assert!(intersection(&a, &empty).is_empty());
        assert_eq!(difference(&a, &empty), a);
        assert!(difference(&empty, &a).is_empty());
    }

    #[test]
    fn test_unique_chars() {
        let letters = unique_chars("hello hello world");
        assert_eq!(letters.len(), 8);
        assert_eq!(
            letters.into_iter().collect::<String>(),
            " dehlorw"
        );
    }

    #[test]
    fn test_set_operations_output() {
        let mut out = Vec::new();
        demonstrate_set_operations(&mut out).unwrap();
        let expected = "\
Union: {1, 2, 3, 4, 5, 6, 7, 8}
Intersection: {4, 5}
Difference A-B: {1, 2, 3}
Symmetric difference: {1, 2, 3, 6, 7, 8}
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_unique_chars_output() {
        let mut out = Vec::new();
        demonstrate_unique_chars(&mut out).unwrap();
        let expected = "\
Unique characters of \"hello hello world\": {' ', 'd', 'e', 'h', 'l', 'o', 'r', 'w'}
8 distinct out of 17
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
