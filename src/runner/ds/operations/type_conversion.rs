use crate::runner::ds::object::ObjectType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::{JsNumberType, JsValue};

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";

/// String conversion as script code sees it (`String(v)`).
///
/// Never fails: symbols render as `Symbol(desc)` instead of throwing.
pub fn to_js_string(v: &JsValue) -> String {
    match v {
        JsValue::Undefined => TYPE_STR_UNDEFINED.to_string(),
        JsValue::Null => TYPE_STR_NULL.to_string(),
        JsValue::Boolean(b) => b.to_string(),
        JsValue::String(s) => s.clone(),
        JsValue::Symbol(s) => s.to_string(),
        JsValue::Number(n) => number_to_string(n),
        JsValue::Object(o) => match &*(**o).borrow() {
            ObjectType::Array(items) => items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        to_js_string(item)
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            other => format!("[object {}]", other.class_name()),
        },
    }
}

pub fn number_to_string(n: &JsNumberType) -> String {
    match n {
        JsNumberType::Integer(i) => i.to_string(),
        JsNumberType::Float(f) => float_to_string(*f),
        JsNumberType::NaN => "NaN".to_string(),
        JsNumberType::PositiveInfinity => "Infinity".to_string(),
        JsNumberType::NegativeInfinity => "-Infinity".to_string(),
    }
}

fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    let abs = f.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // Rust renders `1e21` / `1.5e-7`; scripts expect an explicit `+`.
        let s = format!("{:e}", f);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    } else {
        f.to_string()
    }
}

/// Map a value used as a property name onto a key. Non-negative integral
/// numbers become index keys; everything else but symbols is stringified.
pub fn to_property_key(v: &JsValue) -> PropertyKey {
    match v {
        JsValue::Symbol(s) => PropertyKey::Sym(s.clone()),
        JsValue::Number(JsNumberType::Integer(i)) if *i >= 0 && *i <= u32::MAX as i64 => {
            PropertyKey::Int(*i as u32)
        }
        JsValue::Number(JsNumberType::Float(f))
            if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 =>
        {
            PropertyKey::Int(*f as u32)
        }
        _ => PropertyKey::Str(to_js_string(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::object::OrdinaryObject;
    use crate::runner::ds::symbol::{SymbolData, SYMBOL_TO_STRING_TAG};

    #[test]
    fn test_integer_and_special_numbers() {
        assert_eq!(number_to_string(&JsNumberType::Integer(-42)), "-42");
        assert_eq!(number_to_string(&JsNumberType::NaN), "NaN");
        assert_eq!(number_to_string(&JsNumberType::PositiveInfinity), "Infinity");
        assert_eq!(number_to_string(&JsNumberType::NegativeInfinity), "-Infinity");
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(number_to_string(&JsNumberType::Float(3.14)), "3.14");
        assert_eq!(number_to_string(&JsNumberType::Float(-0.0)), "0");
        assert_eq!(number_to_string(&JsNumberType::Float(0.000001)), "0.000001");
        assert_eq!(number_to_string(&JsNumberType::Float(1.5e-7)), "1.5e-7");
        assert_eq!(number_to_string(&JsNumberType::Float(1e21)), "1e+21");
        assert_eq!(number_to_string(&JsNumberType::Float(2.5e22)), "2.5e+22");
    }

    #[test]
    fn test_primitive_to_string() {
        assert_eq!(to_js_string(&JsValue::Undefined), "undefined");
        assert_eq!(to_js_string(&JsValue::Null), "null");
        assert_eq!(to_js_string(&JsValue::Boolean(false)), "false");
        assert_eq!(
            to_js_string(&JsValue::Symbol(SymbolData::new("tag"))),
            "Symbol(tag)"
        );
    }

    #[test]
    fn test_array_to_string_skips_nullish() {
        let arr = ObjectType::Array(vec![
            JsValue::from(1),
            JsValue::Null,
            JsValue::from("x"),
            JsValue::Undefined,
        ])
        .into_js_value();
        assert_eq!(to_js_string(&arr), "1,,x,");
    }

    #[test]
    fn test_object_to_string_uses_tag() {
        let plain = ObjectType::Ordinary(OrdinaryObject::new()).into_js_value();
        assert_eq!(to_js_string(&plain), "[object Object]");

        let tagged = ObjectType::Ordinary(
            OrdinaryObject::new()
                .with_property(SYMBOL_TO_STRING_TAG.clone(), JsValue::from("Attr")),
        )
        .into_js_value();
        assert_eq!(to_js_string(&tagged), "[object Attr]");
    }

    #[test]
    fn test_property_keys() {
        assert_eq!(to_property_key(&JsValue::from(3)), PropertyKey::Int(3));
        assert_eq!(to_property_key(&JsValue::from(-1)), PropertyKey::from("-1"));
        assert_eq!(to_property_key(&JsValue::from(1.5)), PropertyKey::from("1.5"));
        assert_eq!(to_property_key(&JsValue::from("1")), PropertyKey::from("1"));
    }
}
