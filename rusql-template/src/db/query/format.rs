//! Rendering of argument values as SQL literals.
//!
//! Text is quoted but **not escaped**: a `'` inside a value ends up verbatim in the query. Only
//! pass text that has already been sanitized, or use bound parameters for untrusted input.
//!
//! Floats must be finite: `NaN` and infinities have no SQL literal and are rejected.
use super::Specifier;
use crate::db::SKIP;
use crate::types::{Float, Value};
use crate::utils::{to_float, to_integer};
use crate::{Error, Result};

const NULL: &str = "NULL";
const SEPARATOR: &str = ", ";

/// Renders a scalar with its default literal form.
pub fn format_default(value: &Value) -> Result<String> {
    match value {
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => float_literal(*f),
        Value::Text(text) => Ok(format!("'{text}'")),
        // only reached for collection elements, a top-level sentinel never gets formatted
        Value::Skip => Ok(format!("'{SKIP}'")),
        Value::Null => Ok(NULL.to_string()),
        Value::Boolean(b) => Ok(u8::from(*b).to_string()),
        Value::List(_) | Value::Mapping(_) => Err(Error::UnsupportedType {
            kind: value.kind(),
        }),
    }
}

pub fn format_by_specifier(specifier: Specifier, value: &Value) -> Result<String> {
    match specifier {
        Specifier::Integer => Ok(match value {
            Value::Null => NULL.to_string(),
            value => to_integer(value).to_string(),
        }),
        Specifier::Float => Ok(match value {
            Value::Null => NULL.to_string(),
            value => float_literal(to_float(value))?,
        }),
        Specifier::Collection => format_collection(value),
        Specifier::Identifier => format_identifier(value),
        Specifier::Default => format_default(value),
    }
}

/// Renders a list as `1, 'a', NULL` and a mapping as `` `key` = literal, ... ``.
pub fn format_collection(value: &Value) -> Result<String> {
    let items = match value {
        Value::List(items) => items
            .iter()
            .map(format_default)
            .collect::<Result<Vec<_>>>()?,
        Value::Mapping(entries) => entries
            .iter()
            .map(|(key, value)| -> Result<String> {
                Ok(format!("{} = {}", quote_identifier(key), format_default(value)?))
            })
            .collect::<Result<Vec<_>>>()?,
        value => {
            return Err(Error::TypeMismatch {
                expected: "list or mapping",
                found: value.kind(),
            })
        }
    };
    Ok(items.join(SEPARATOR))
}

pub fn format_identifier(value: &Value) -> Result<String> {
    match value {
        Value::List(items) => join_identifiers(items.iter()),
        Value::Mapping(entries) => join_identifiers(entries.values()),
        value => Ok(quote_identifier(&identifier_text(value)?)),
    }
}

fn join_identifiers<'v>(values: impl Iterator<Item = &'v Value>) -> Result<String> {
    let names = values
        .map(|value| identifier_text(value).map(|name| quote_identifier(&name)))
        .collect::<Result<Vec<_>>>()?;
    Ok(names.join(SEPARATOR))
}

fn identifier_text(value: &Value) -> Result<String> {
    match value {
        Value::Text(text) => Ok(text.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => float_literal(*f),
        Value::Skip => Ok(SKIP.to_string()),
        Value::Boolean(true) => Ok("1".to_string()),
        Value::Boolean(false) | Value::Null => Ok(String::new()),
        Value::List(_) | Value::Mapping(_) => Err(Error::UnsupportedType {
            kind: value.kind(),
        }),
    }
}

fn float_literal(f: Float) -> Result<String> {
    if f.is_finite() {
        Ok(f.to_string())
    } else {
        Err(Error::UnsupportedType {
            kind: "non-finite float",
        })
    }
}

fn quote_identifier(name: &str) -> String {
    format!("`{name}`")
}
