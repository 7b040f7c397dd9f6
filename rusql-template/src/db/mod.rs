//! The `db` module holds the query templating engine.
//!
//! A template is parsed once, its placeholders are filled from the argument list, and its
//! conditional blocks are then kept or dropped depending on which slots were skipped.
use crate::types::Value;

/// The `query` module contains the template parser, the formatters and the builder.
pub mod query;

/// Text of the sentinel argument. Passing it (or [`skip`]) omits a placeholder, together with
/// the conditional block that contains it.
pub const SKIP: &str = "__SKIP__";

/// The placeholder marker of the default template syntax.
pub const PLACEHOLDER: char = '?';

/// The sentinel value.
pub fn skip() -> Value {
    Value::Skip
}
