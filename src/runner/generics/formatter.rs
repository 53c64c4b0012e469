//! printf-style formatting of console arguments.
//!
//! The first argument, when it is a string, is a template. Each step
//! substitutes the first `%X` specifier with the next argument and drops that
//! argument from the list; the partially filled template is then scanned
//! again from the start. Formatting stops once the template has no `%` left,
//! only the template remains, or the template cannot be used at all. The
//! parts that come back are meant for a sink that prints extra arguments
//! after the formatted string.
//!
//! ```
//! use just_generics::runner::generics::formatter::format;
//! use just_generics::runner::ds::value::JsValue;
//!
//! let parts = format(vec![
//!     JsValue::from("%s has %d items"),
//!     JsValue::from("list"),
//!     JsValue::from("3"),
//!     JsValue::from("extra"),
//! ]);
//! assert_eq!(parts, vec![JsValue::from("list has 3 items"), JsValue::from("extra")]);
//! ```

use std::collections::VecDeque;

use log::trace;

use crate::runner::ds::operations::numeric_string::{parse_float, parse_int};
use crate::runner::ds::operations::type_conversion::{number_to_string, to_js_string};
use crate::runner::ds::value::JsValue;

/// The character after a `%` in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionSpecifier {
    /// `%s`
    String,
    /// `%d` and `%i`
    Integer,
    /// `%f`
    Float,
    /// `%o`
    Object,
    /// `%O`
    ObjectExpanded,
}

impl ConversionSpecifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(ConversionSpecifier::String),
            'd' | 'i' => Some(ConversionSpecifier::Integer),
            'f' => Some(ConversionSpecifier::Float),
            'o' => Some(ConversionSpecifier::Object),
            'O' => Some(ConversionSpecifier::ObjectExpanded),
            _ => None,
        }
    }

    /// Render `value` for this specifier.
    pub fn convert(self, value: &JsValue) -> String {
        match self {
            ConversionSpecifier::String => to_js_string(value),
            ConversionSpecifier::Integer => number_to_string(&parse_int(value, 10)),
            ConversionSpecifier::Float => number_to_string(&parse_float(value)),
            // No object inspection: both render as plain strings.
            ConversionSpecifier::Object | ConversionSpecifier::ObjectExpanded => {
                to_js_string(value)
            }
        }
    }
}

/// Format `args` into the parts a console sink prints.
///
/// * No arguments give `[""]`, a single argument its string form.
/// * A non-string first argument, or a template without a usable `%`,
///   returns the arguments untouched.
/// * An unknown specifier consumes its argument and leaves the template as
///   it was.
pub fn format(args: Vec<JsValue>) -> Vec<JsValue> {
    match args.len() {
        0 => return vec![JsValue::String(String::new())],
        1 => return vec![JsValue::String(to_js_string(&args[0]))],
        _ => {}
    }

    let mut parts = VecDeque::from(args);
    // Every step drops one argument, so this runs at most `len - 1` times.
    while substitute_first(&mut parts) {}
    Vec::from(parts)
}

/// Run one substitution step over `parts` (at least two long). Returns
/// whether another step is needed.
fn substitute_first(parts: &mut VecDeque<JsValue>) -> bool {
    let template = match parts.front() {
        Some(JsValue::String(s)) => s,
        _ => return false,
    };
    let offset = match template.find('%') {
        Some(offset) => offset,
        None => return false,
    };
    let specifier = match template[offset + 1..].chars().next() {
        Some(c) => c,
        None => return false,
    };

    let next_template = ConversionSpecifier::from_char(specifier).map(|conversion| {
        format!(
            "{}{}{}",
            &template[..offset],
            conversion.convert(&parts[1]),
            &template[offset + 1 + specifier.len_utf8()..]
        )
    });
    trace!(
        "format: %{} {} ({} parts)",
        specifier,
        if next_template.is_some() { "substituted" } else { "skipped" },
        parts.len()
    );

    parts.remove(1);
    if let Some(t) = next_template {
        parts[0] = JsValue::String(t);
    }

    let has_more = parts
        .front()
        .and_then(JsValue::as_str)
        .map_or(false, |t| t.contains('%'));
    has_more && parts.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifier_table() {
        assert_eq!(ConversionSpecifier::from_char('s'), Some(ConversionSpecifier::String));
        assert_eq!(ConversionSpecifier::from_char('i'), Some(ConversionSpecifier::Integer));
        assert_eq!(ConversionSpecifier::from_char('d'), Some(ConversionSpecifier::Integer));
        assert_eq!(ConversionSpecifier::from_char('f'), Some(ConversionSpecifier::Float));
        assert_eq!(ConversionSpecifier::from_char('O'), Some(ConversionSpecifier::ObjectExpanded));
        assert_eq!(ConversionSpecifier::from_char('x'), None);
        assert_eq!(ConversionSpecifier::from_char('%'), None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ConversionSpecifier::Integer.convert(&JsValue::from("12.9kg")), "12");
        assert_eq!(ConversionSpecifier::Float.convert(&JsValue::from("12.9kg")), "12.9");
        assert_eq!(ConversionSpecifier::Float.convert(&JsValue::Undefined), "NaN");
        assert_eq!(ConversionSpecifier::Object.convert(&JsValue::from(true)), "true");
    }

    #[test]
    fn test_step_drops_exactly_one_part() {
        let mut parts = VecDeque::from(vec![
            JsValue::from("%s %s"),
            JsValue::from("a"),
            JsValue::from("b"),
        ]);
        assert!(substitute_first(&mut parts));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], JsValue::from("a %s"));
        assert!(!substitute_first(&mut parts));
        assert_eq!(Vec::from(parts), vec![JsValue::from("a b")]);
    }
}
