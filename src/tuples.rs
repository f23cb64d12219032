//! 8.3 Tuples
//!
//! Fixed size, ordered, and each position may have its own type.

use std::io::Write;

pub fn demonstrate_tuple_usage(out: &mut impl Write) -> std::io::Result<()> {
    let point = (10, 20);
    let coordinates = (point, (30, 40));

    writeln!(out, "Point: {:?}", point)?;
    writeln!(out, "Coordinates: {:?}", coordinates)?;

    let (x_coord, y_coord) = point;
    writeln!(out, "X: {}, Y: {}", x_coord, y_coord)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_usage_output() {
        let mut out = Vec::new();
        demonstrate_tuple_usage(&mut out).unwrap();
        let expected = "\
Point: (10, 20)
Coordinates: ((10, 20), (30, 40))
X: 10, Y: 20
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
