//! 8.6 Looping over sequences

use std::io::Write;

pub fn demonstrate_iterations(out: &mut impl Write) -> std::io::Result<()> {
    // enumerate: index alongside each item
    let fruits = ["apple", "banana", "orange"];
    for (index, fruit) in fruits.iter().enumerate() {
        writeln!(out, "{}: {}", index, fruit)?;
    }

    // Key/value entries, in insertion order
    let colors = [("red", "rojo"), ("blue", "azul")];
    for (english, spanish) in colors {
        writeln!(out, "{} = {}", english, spanish)?;
    }

    // zip stops at the shorter side
    let questions = ["name", "age"];
    let answers = ["Alice", "25"];
    for (question, answer) in questions.iter().zip(answers.iter()) {
        writeln!(out, "{}: {}", question, answer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterations_output() {
        let mut out = Vec::new();
        demonstrate_iterations(&mut out).unwrap();
        let expected = "\
0: apple
1: banana
2: orange
red = rojo
blue = azul
name: Alice
age: 25
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
