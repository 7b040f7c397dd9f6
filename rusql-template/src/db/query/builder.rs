use super::condition::resolve_blocks;
use super::format::format_by_specifier;
use super::statement::{Segment, Statement};
use super::{Span, Specifier, Syntax};
use crate::db::SKIP;
use crate::types::Value;
use crate::{Error, Result};

/// Turns a template and its arguments into a literal query.
///
/// The builder only holds its [`Syntax`]; arguments are consumed within a single
/// [`build`](QueryBuilder::build) call, so one builder can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    syntax: Syntax,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_syntax(syntax: Syntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Builds the literal query.
    ///
    /// # Example
    /// ```
    /// use rusql_template::prelude::*;
    ///
    /// let query = QueryBuilder::new()
    ///     .build(
    ///         "SELECT name FROM users WHERE ?# IN (?a){ AND block = ?d}",
    ///         args!["user_id", vec![1, 2, 3], skip()],
    ///     )
    ///     .unwrap();
    /// assert_eq!(query, "SELECT name FROM users WHERE `user_id` IN (1, 2, 3)");
    /// ```
    pub fn build<I>(&self, template: &str, args: I) -> Result<String>
    where
        I: IntoIterator<Item = Value>,
    {
        let statement = Statement::parse(template, &self.syntax);
        let spans = self.substitute(&statement, args)?;
        Ok(resolve_blocks(&spans))
    }

    /// Fills every placeholder of `statement` with the next argument. Arguments left over after
    /// the last placeholder are ignored.
    pub fn substitute<'t, I>(&self, statement: &Statement<'t>, args: I) -> Result<Vec<Span<'t>>>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut args = args.into_iter();
        let mut position = 0;
        let mut spans = Vec::with_capacity(statement.segments().len());

        for segment in statement.segments() {
            let span = match *segment {
                Segment::Text(text) => Span::Literal(text),
                Segment::Open => Span::Open,
                Segment::Close => Span::Close,
                Segment::Placeholder(specifier) => {
                    position += 1;
                    let value = args.next().ok_or(Error::MissingArgument { position })?;
                    if value.is_skip() {
                        Span::Omitted
                    } else {
                        Span::Rendered {
                            text: format_by_specifier(specifier, &value)?,
                            omits: holds_skip(specifier, &value),
                        }
                    }
                }
            };
            spans.push(span);
        }
        Ok(spans)
    }
}

/// Whether the rendered text of a `?a` or `?#` collection shows the sentinel: an element, a
/// mapping value, or (for `?a`, which prints keys) a mapping key.
fn holds_skip(specifier: Specifier, value: &Value) -> bool {
    match (specifier, value) {
        (Specifier::Collection | Specifier::Identifier, Value::List(items)) => {
            items.iter().any(Value::is_skip)
        }
        (Specifier::Collection, Value::Mapping(entries)) => entries
            .iter()
            .any(|(key, value)| key == SKIP || value.is_skip()),
        (Specifier::Identifier, Value::Mapping(entries)) => entries.values().any(Value::is_skip),
        _ => false,
    }
}

/// Builds `template` with the default syntax.
pub fn build<I>(template: &str, args: I) -> Result<String>
where
    I: IntoIterator<Item = Value>,
{
    QueryBuilder::new().build(template, args)
}
