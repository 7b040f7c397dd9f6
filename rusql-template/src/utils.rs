use crate::types::{Float, Integer, Value};

/// Coerces a value to an integer the loose way: floats truncate toward zero, text is read from
/// its leading numeric part and collections count as `1` unless empty.
pub fn to_integer(value: &Value) -> Integer {
    match value {
        Value::Integer(i) => *i,
        Value::Float(f) => *f as Integer,
        Value::Boolean(b) => Integer::from(*b),
        Value::Text(text) => text_to_integer(text),
        Value::List(items) => Integer::from(!items.is_empty()),
        Value::Mapping(entries) => Integer::from(!entries.is_empty()),
        Value::Null | Value::Skip => 0,
    }
}

pub fn to_float(value: &Value) -> Float {
    match value {
        Value::Integer(i) => *i as Float,
        Value::Float(f) => *f,
        Value::Boolean(b) => Float::from(u8::from(*b)),
        Value::Text(text) => numeric_prefix(text).parse().unwrap_or(0.0),
        Value::List(items) => Float::from(u8::from(!items.is_empty())),
        Value::Mapping(entries) => Float::from(u8::from(!entries.is_empty())),
        Value::Null | Value::Skip => 0.0,
    }
}

fn text_to_integer(text: &str) -> Integer {
    let number = numeric_prefix(text);
    if number.contains(['.', 'e', 'E']) {
        return number.parse::<Float>().map_or(0, |f| f as Integer);
    }
    match number.parse::<Integer>() {
        Ok(i) => i,
        // only digits are left, so this is an overflow
        Err(_) if number.len() > 1 => {
            if number.starts_with('-') {
                Integer::MIN
            } else {
                Integer::MAX
            }
        }
        Err(_) => 0,
    }
}

/// The longest prefix of `text` (after leading whitespace) that reads as a decimal number,
/// optionally signed, with an optional fraction and exponent.
fn numeric_prefix(text: &str) -> &str {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &text[..end]
}
