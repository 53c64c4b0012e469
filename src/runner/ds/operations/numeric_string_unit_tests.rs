use crate::runner::ds::operations::numeric_string::{
    parse_float, parse_float_str, parse_int, parse_int_str,
};
use crate::runner::ds::value::{JsNumberType, JsValue};

fn assert_int(input: &str, radix: u32, expected: JsNumberType) {
    let actual = parse_int_str(input, radix);
    assert_eq!(
        actual, expected,
        "For the input: \"{}\" (radix {}), the expected out was: \"{:?}\", but got: \"{:?}\"",
        input, radix, expected, actual
    )
}

fn assert_float(input: &str, expected: JsNumberType) {
    let actual = parse_float_str(input);
    assert_eq!(
        actual, expected,
        "For the input: \"{}\", the expected out was: \"{:?}\", but got: \"{:?}\"",
        input, expected, actual
    )
}

#[test]
fn test_decimal_integer_parse1() {
    assert_int("1234", 10, JsNumberType::Integer(1234))
}

#[test]
fn test_decimal_integer_parse2() {
    assert_int("01234", 10, JsNumberType::Integer(1234))
}

#[test]
fn test_decimal_integer_leading_whitespace() {
    assert_int(" \t\n 1234", 10, JsNumberType::Integer(1234))
}

#[test]
fn test_decimal_integer_trailing_garbage() {
    assert_int("1234 abcd", 10, JsNumberType::Integer(1234));
    assert_int("42px", 10, JsNumberType::Integer(42));
    assert_int("3.99", 10, JsNumberType::Integer(3));
    assert_int("1e3", 10, JsNumberType::Integer(1));
}

#[test]
fn test_decimal_integer_signs() {
    assert_int("-17", 10, JsNumberType::Integer(-17));
    assert_int("+17", 10, JsNumberType::Integer(17));
    assert_int("-0", 10, JsNumberType::Integer(0));
}

#[test]
fn test_integer_no_digits() {
    assert_int("abc", 10, JsNumberType::NaN);
    assert_int("  abc  1234", 10, JsNumberType::NaN);
    assert_int("", 10, JsNumberType::NaN);
    assert_int("   ", 10, JsNumberType::NaN);
    assert_int("-", 10, JsNumberType::NaN);
    assert_int("- 1", 10, JsNumberType::NaN);
}

#[test]
fn test_hex_prefix_only_honoured_for_hex_radix() {
    assert_int("0x1A", 16, JsNumberType::Integer(26));
    assert_int("0X1a", 0, JsNumberType::Integer(26));
    assert_int("0x1A", 10, JsNumberType::Integer(0));
    assert_int("0x", 16, JsNumberType::NaN);
    assert_int("ff", 16, JsNumberType::Integer(255));
}

#[test]
fn test_other_radices() {
    assert_int("101", 2, JsNumberType::Integer(5));
    assert_int("1012", 2, JsNumberType::Integer(5));
    assert_int("z", 36, JsNumberType::Integer(35));
    assert_int("2", 2, JsNumberType::NaN);
    assert_int("10", 1, JsNumberType::NaN);
    assert_int("10", 37, JsNumberType::NaN);
}

#[test]
fn test_integer_beyond_safe_range() {
    assert_int(
        "9007199254740993",
        10,
        JsNumberType::Float(9007199254740992.0),
    );
    assert_int(
        "123456789012345678901234567890",
        10,
        JsNumberType::Float(1.2345678901234568e29),
    );
}

#[test]
fn test_parse_int_of_non_strings() {
    assert_eq!(parse_int(&JsValue::from(42.7), 10), JsNumberType::Integer(42));
    assert_eq!(parse_int(&JsValue::from(true), 10), JsNumberType::NaN);
    assert_eq!(parse_int(&JsValue::Undefined, 10), JsNumberType::NaN);
    assert_eq!(parse_int(&JsValue::Null, 36), JsNumberType::Integer(1112745));
}

#[test]
fn test_decimal_fraction_parse1() {
    assert_float("1234.5", JsNumberType::Float(1234.5))
}

#[test]
fn test_decimal_fraction_parse2() {
    assert_float("-1234.5", JsNumberType::Float(-1234.5))
}

#[test]
fn test_decimal_fraction_parse3() {
    assert_float(".5", JsNumberType::Float(0.5));
    assert_float("-.5", JsNumberType::Float(-0.5));
}

#[test]
fn test_decimal_fraction_trailing_dot() {
    assert_float("7.", JsNumberType::Integer(7))
}

#[test]
fn test_float_exponents() {
    assert_float("1e3", JsNumberType::Integer(1000));
    assert_float("2.5E-3", JsNumberType::Float(0.0025));
    assert_float("1e", JsNumberType::Integer(1));
    assert_float("1e+", JsNumberType::Integer(1));
}

#[test]
fn test_float_trailing_garbage() {
    assert_float("3.14abc", JsNumberType::Float(3.14));
    assert_float("  42px", JsNumberType::Integer(42));
    assert_float("1.2.3", JsNumberType::Float(1.2));
}

#[test]
fn test_float_infinity() {
    assert_float("Infinity", JsNumberType::PositiveInfinity);
    assert_float("-Infinityx", JsNumberType::NegativeInfinity);
    assert_float("infinity", JsNumberType::NaN);
}

#[test]
fn test_float_no_prefix() {
    assert_float("abc", JsNumberType::NaN);
    assert_float("", JsNumberType::NaN);
    assert_float(".", JsNumberType::NaN);
    assert_float("+", JsNumberType::NaN);
}

#[test]
fn test_parse_float_of_non_strings() {
    assert_eq!(parse_float(&JsValue::from(2.5)), JsNumberType::Float(2.5));
    assert_eq!(parse_float(&JsValue::Null), JsNumberType::NaN);
}
