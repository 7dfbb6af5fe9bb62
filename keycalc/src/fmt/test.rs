use super::*;

fn assert_fmt(expected: &str, val: f64) {
    assert_eq!(format_result(val), Ok(expected.to_string()));
}

#[test]
fn integer() {
    assert_fmt("15", 15.0);
}

#[test]
fn negative_integer() {
    assert_fmt("-3", -3.0);
}

#[test]
fn zero() {
    assert_fmt("0", 0.0);
}

#[test]
fn fraction() {
    assert_fmt("0.5", 0.5);
}

#[test]
fn trailing_zeros_stripped() {
    assert_fmt("2.5", 2.5);
    assert_fmt("-0.125", -0.125);
}

#[test]
fn six_fractional_digits() {
    assert_fmt("0.333333", 1.0 / 3.0);
}

#[test]
fn near_integer_snaps() {
    assert_fmt("5", 5.00000001);
    assert_fmt("0", 1e-8);
}

#[test]
fn wide_integer_falls_back_to_scientific() {
    assert_fmt("1.000e20", 1e20);
    assert_fmt("-4.568e30", -4.5678e30);
}

#[test]
fn sixteen_digits_still_fit() {
    assert_fmt("1234567890123456", 1234567890123456.0);
}
