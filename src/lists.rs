//! 8.2 Lists
//!
//! `Vec<T>` is the ordered, mutable, iterable sequence.

use std::io::Write;

pub fn demonstrate_list_operations(out: &mut impl Write) -> std::io::Result<()> {
    let mut numbers = vec![1, 2, 3, 4, 5];

    numbers.push(6);
    writeln!(out, "After push: {:?}", numbers)?;

    numbers.insert(0, 0);
    writeln!(out, "After insert: {:?}", numbers)?;

    // pop() on a non-empty Vec is always Some
    if let Some(removed) = numbers.pop() {
        writeln!(out, "After pop: {:?}, removed: {}", numbers, removed)?;
    }
    Ok(())
}
