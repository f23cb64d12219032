//! 8.8.3 Practice exercises with worked solutions.
//!
//! List comprehensions become iterator chains ending in
//! `collect()`; nested `for` clauses become `flat_map` or `iproduct!`.

mod phone_book;

pub use phone_book::{PhoneBook, NOT_FOUND};

use crate::config::ChapterConfig;
use crate::error::{ChapterError, Result};
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::io::Write;
use tracing::{debug, info};

// =============================================================================
// Exercise 1: comprehension-equivalent builders
// =============================================================================

/// `['C', 'O', 'U', 'N', 'T', 'R', 'Y']`
pub fn country_letters() -> Vec<char> {
    "COUNTRY".chars().collect()
}

/// `["C", "A", "T", "CC", "AA", "TT", "CCC", "AAA", "TTT"]`
pub fn pattern_list() -> Vec<String> {
    let letters = ["C", "A", "T"];
    (1..=3)
        .flat_map(|count| letters.iter().map(move |letter| letter.repeat(count)))
        .collect()
}

/// `[[2], [3], [4], [3], [4], [5], [4], [5], [6]]`
pub fn nested_lists() -> Vec<Vec<u32>> {
    (2..5).flat_map(|i| (i..i + 3).map(|j| vec![j])).collect()
}

/// `[[2, 3, 4, 5], [3, 4, 5, 6], [4, 5, 6, 7], [5, 6, 7, 8]]`
pub fn sequential_lists() -> Vec<Vec<u32>> {
    (2..6).map(|i| (i..i + 4).collect()).collect()
}

/// `(x, y)` pairs with `y` in the outer loop.
pub fn coordinate_pairs() -> Vec<(u32, u32)> {
    iproduct!(1..4, 1..4).map(|(y, x)| (x, y)).collect()
}

pub fn squares() -> Vec<u32> {
    (0..10).map(|i| i * i).collect()
}

// =============================================================================
// Integer multiplication without silent wrap-around
// =============================================================================

/// Integers whose multiplication reports overflow instead of wrapping.
pub trait CheckedMul: Copy {
    const ONE: Self;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_checked_mul {
    ($($t:ty),*) => {
        $(
            impl CheckedMul for $t {
                const ONE: Self = 1;

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_checked_mul!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

// =============================================================================
// Exercises 2-6: working with a list of numbers
// =============================================================================

/// Seeded RNG when `seed` is set, otherwise one seeded from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "using fixed RNG seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// `size` numbers drawn uniformly from `1..=max_value`.
pub fn random_list(size: usize, max_value: u32, rng: &mut impl Rng) -> Result<Vec<u32>> {
    if max_value == 0 {
        return Err(ChapterError::InvalidRange { max: max_value });
    }
    let numbers: Vec<u32> = (0..size).map(|_| rng.gen_range(1..=max_value)).collect();
    debug!(size, max_value, "generated random list");
    Ok(numbers)
}

/// Occurrences of each target in `numbers`; absent targets map to 0.
pub fn count_targets<T: Ord + Copy>(numbers: &[T], targets: &[T]) -> BTreeMap<T, usize> {
    targets
        .iter()
        .map(|&target| (target, numbers.iter().filter(|&&n| n == target).count()))
        .collect()
}

/// `(even, odd)` counts.
pub fn count_even_odd<T: Copy + Into<i64>>(numbers: &[T]) -> (usize, usize) {
    let even = numbers
        .iter()
        .filter(|&&n| Into::<i64>::into(n) % 2 == 0)
        .count();
    (even, numbers.len() - even)
}

/// Squares in reverse order. `Overflow` carries the element's original index.
pub fn reversed_squares<T: CheckedMul>(numbers: &[T]) -> Result<Vec<T>> {
    numbers
        .iter()
        .enumerate()
        .rev()
        .map(|(index, &n)| n.checked_mul(n).ok_or(ChapterError::Overflow { index }))
        .collect()
}

/// True when every element is `<=` the next one.
pub fn is_sorted_ascending<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

// =============================================================================
// Exercises 8-9: deduplication and products
// =============================================================================

/// First occurrence of each item, in original order.
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Product of all elements; the empty product is 1.
pub fn product<T: CheckedMul>(items: &[T]) -> Result<T> {
    items.iter().enumerate().try_fold(T::ONE, |acc, (index, &n)| {
        acc.checked_mul(n).ok_or(ChapterError::Overflow { index })
    })
}

/// Parse every element as a number and multiply.
pub fn product_of_text(items: &[&str]) -> Result<f64> {
    let mut result = 1.0;
    for (index, raw) in items.iter().enumerate() {
        let n: f64 = raw.trim().parse().map_err(|_| ChapterError::NonNumeric {
            index,
            value: raw.to_string(),
        })?;
        result *= n;
    }
    Ok(result)
}

// =============================================================================
// Worked solutions, printed
// =============================================================================

pub fn run_exercises(
    out: &mut impl Write,
    config: &ChapterConfig,
    rng: &mut impl Rng,
) -> Result<()> {
    writeln!(out, "--- Exercise 1: comprehensions ---")?;
    writeln!(out, "a) {:?}", country_letters())?;
    writeln!(out, "b) {:?}", pattern_list())?;
    writeln!(out, "c) {:?}", nested_lists())?;
    writeln!(out, "d) {:?}", sequential_lists())?;
    writeln!(out, "e) {:?}", coordinate_pairs())?;
    writeln!(out, "f) {:?}", squares())?;

    writeln!(out, "\n--- Exercise 2: random list ---")?;
    let my_list = random_list(config.random_size, config.random_max, rng)?;
    writeln!(out, "Generated list: {:?}", my_list)?;
    writeln!(out, "List length: {}", my_list.len())?;

    writeln!(out, "\n--- Exercise 3: counting targets ---")?;
    for (num, count) in count_targets(&my_list, &config.targets) {
        writeln!(out, "Number {} occurs {} times", num, count)?;
    }

    writeln!(out, "\n--- Exercise 4: even and odd ---")?;
    let (even, odd) = count_even_odd(&my_list);
    writeln!(out, "Even numbers: {}", even)?;
    writeln!(out, "Odd numbers: {}", odd)?;

    writeln!(out, "\n--- Exercise 5: reversed squares ---")?;
    let small = [1, 2, 3, 4, 5];
    writeln!(out, "Original list: {:?}", small)?;
    writeln!(out, "Squares in reverse: {:?}", reversed_squares(&small)?)?;

    writeln!(out, "\n--- Exercise 6: sorted check ---")?;
    writeln!(out, "{}", is_sorted_ascending(&[1, 2, 3, 4, 5]))?;
    writeln!(out, "{}", is_sorted_ascending(&[1, 3, 2, 4, 5]))?;

    writeln!(out, "\n--- Exercise 7: phone book ---")?;
    let mut book = PhoneBook::new();
    book.insert("Anna", "555-0101");
    book.insert("Boris", "555-0202");
    writeln!(out, "Anna: {}", book.find("Anna"))?;
    writeln!(out, "Vera: {}", book.find("Vera"))?;

    writeln!(out, "\n--- Exercise 8: remove duplicates ---")?;
    let original = [1, 2, 2, 3, 3, 3, 4, 4, 4, 4];
    writeln!(out, "Original list: {:?}", original)?;
    writeln!(out, "Without duplicates: {:?}", remove_duplicates(&original))?;

    writeln!(out, "\n--- Exercise 9: product ---")?;
    writeln!(out, "{}", product(&[1, 2, 3, 4])?)?;
    match product(&[i64::MAX, 2]) {
        Ok(value) => writeln!(out, "{}", value)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }
    match product_of_text(&["a", "b"]) {
        Ok(value) => writeln!(out, "{}", value)?,
        Err(e) => writeln!(out, "Error: {}", e)?,
    }
    Ok(())
}
