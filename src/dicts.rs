//! 8.5 Dictionaries
//!
//! Key/value pairs with unique keys. The student record mixes value types
//! (text, integer, list, float), so it is stored as a `serde_json::Map`;
//! the `preserve_order` feature keeps keys in insertion order.

use serde_json::{json, Map, Value};
use std::io::Write;

pub fn student_record() -> Map<String, Value> {
    let mut student = Map::new();
    student.insert("name".into(), json!("Anna"));
    student.insert("age".into(), json!(20));
    student.insert("courses".into(), json!(["Python", "Data Science"]));
    student
}

pub fn demonstrate_dict_operations(out: &mut impl Write) -> std::io::Result<()> {
    let mut student = student_record();

    // Inserting a new key appends it
    student.insert("grade".into(), json!(4.5));
    writeln!(out, "After insert: {}", Value::Object(student.clone()))?;

    let name = student.get("name").and_then(Value::as_str).unwrap_or("unknown");
    writeln!(out, "Name: {}", name)?;

    // shift_remove keeps the remaining keys in order; swap_remove would not
    student.shift_remove("age");
    writeln!(out, "After removing age: {}", Value::Object(student))?;
    Ok(())
}
