//! Permissive numeric parsing of script values (`parseInt` / `parseFloat`).
//!
//! Both read the longest numeric prefix of the value's string form and never
//! fail: input without a usable prefix yields `NaN`.

use log::trace;
use pest::Parser;
use pest_derive::Parser;

use crate::runner::ds::operations::type_conversion::to_js_string;
use crate::runner::ds::value::{JsNumberType, JsValue};

#[derive(Parser)]
#[grammar = "runner/ds/operations/numeric_string.pest"] // relative to src
struct NumericStringParser;

/// `parseInt(v, radix)`. A radix of `0` means "not given": base 10 unless the
/// text starts with `0x`.
pub fn parse_int(v: &JsValue, radix: u32) -> JsNumberType {
    parse_int_str(&to_js_string(v), radix)
}

/// `parseFloat(v)`.
pub fn parse_float(v: &JsValue) -> JsNumberType {
    parse_float_str(&to_js_string(v))
}

pub fn parse_int_str(s: &str, radix: u32) -> JsNumberType {
    let (mut radix, rule) = match radix {
        0 => (10, Rule::hex_int_prefix),
        16 => (16, Rule::hex_int_prefix),
        2..=36 => (radix, Rule::int_prefix),
        _ => return JsNumberType::NaN,
    };

    let prefix = match NumericStringParser::parse(rule, s)
        .ok()
        .and_then(|mut pairs| pairs.next())
    {
        Some(p) => p,
        None => return JsNumberType::NaN,
    };

    let mut negative = false;
    let mut digits = "";
    for pair in prefix.into_inner() {
        match pair.as_rule() {
            Rule::sign => negative = pair.as_str() == "-",
            Rule::hex_indicator => radix = 16,
            Rule::radix_digits => digits = pair.as_str(),
            _ => {}
        }
    }

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or_else(|| digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        trace!("parseInt: no digits in {:?} for radix {}", s, radix);
        return JsNumberType::NaN;
    }

    match i64::from_str_radix(digits, radix) {
        Ok(i) if i <= JsNumberType::MAX_SAFE_INTEGER => {
            JsNumberType::Integer(if negative { -i } else { i })
        }
        _ => {
            // Beyond the safe range the host only has double precision.
            let magnitude = if radix == 10 {
                digits.parse::<f64>().unwrap_or(f64::NAN)
            } else {
                digits.chars().fold(0.0, |acc, c| {
                    acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
                })
            };
            JsNumberType::from_f64(if negative { -magnitude } else { magnitude })
        }
    }
}

pub fn parse_float_str(s: &str) -> JsNumberType {
    let prefix = match NumericStringParser::parse(Rule::float_prefix, s)
        .ok()
        .and_then(|mut pairs| pairs.next())
    {
        Some(p) => p,
        None => {
            trace!("parseFloat: no numeric prefix in {:?}", s);
            return JsNumberType::NaN;
        }
    };

    let mut negative = false;
    let mut magnitude = f64::NAN;
    for pair in prefix.into_inner() {
        match pair.as_rule() {
            Rule::sign => negative = pair.as_str() == "-",
            Rule::infinity => magnitude = f64::INFINITY,
            Rule::unsigned_decimal => {
                magnitude = pair.as_str().parse::<f64>().unwrap_or(f64::NAN)
            }
            _ => {}
        }
    }
    JsNumberType::from_f64(if negative { -magnitude } else { magnitude })
}
