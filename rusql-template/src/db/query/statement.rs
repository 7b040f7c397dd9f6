use super::{Specifier, Syntax};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    Placeholder(Specifier),
    Open,
    Close,
}

/// A parsed template.
///
/// Block markers are paired while parsing: a block ends at the first close marker after its
/// open marker, an open marker inside a block is plain text, and so are a stray close marker
/// and an open marker that is never closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'t> {
    segments: Vec<Segment<'t>>,
}

impl<'t> Statement<'t> {
    pub fn parse(template: &'t str, syntax: &Syntax) -> Self {
        let mut segments = Vec::new();
        // segment index and byte offset of the block being read
        let mut open: Option<(usize, usize)> = None;
        let mut text_start = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((at, c)) = chars.next() {
            let mut end = at + c.len_utf8();
            let segment = if c == syntax.placeholder {
                let specifier = chars
                    .peek()
                    .and_then(|&(_, next)| Specifier::from_char(next));
                match specifier {
                    Some(specifier) => {
                        chars.next();
                        end += 1;
                        Segment::Placeholder(specifier)
                    }
                    None => Segment::Placeholder(Specifier::Default),
                }
            } else if c == syntax.block_open && open.is_none() {
                Segment::Open
            } else if c == syntax.block_close && open.is_some() {
                Segment::Close
            } else {
                continue;
            };

            push_text(&mut segments, &template[text_start..at]);
            match segment {
                Segment::Open => open = Some((segments.len(), at)),
                Segment::Close => open = None,
                _ => {}
            }
            segments.push(segment);
            text_start = end;
        }
        push_text(&mut segments, &template[text_start..]);

        if let Some((index, at)) = open {
            segments[index] = Segment::Text(&template[at..at + syntax.block_open.len_utf8()]);
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment<'t>] {
        &self.segments
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder(_)))
            .count()
    }
}

fn push_text<'t>(segments: &mut Vec<Segment<'t>>, text: &'t str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(template: &str) -> Vec<Segment<'_>> {
        Statement::parse(template, &Syntax::default()).segments
    }

    #[test]
    fn test_placeholders_and_specifiers() {
        use Segment::*;
        assert_eq!(
            parse("SELECT ?# FROM t WHERE a = ?d AND b IN (?a) AND c = ?f OR d = ?"),
            vec![
                Text("SELECT "),
                Placeholder(Specifier::Identifier),
                Text(" FROM t WHERE a = "),
                Placeholder(Specifier::Integer),
                Text(" AND b IN ("),
                Placeholder(Specifier::Collection),
                Text(") AND c = "),
                Placeholder(Specifier::Float),
                Text(" OR d = "),
                Placeholder(Specifier::Default),
            ]
        );
    }

    #[test]
    fn test_unknown_specifier_is_text() {
        use Segment::*;
        assert_eq!(
            parse("?x??d"),
            vec![
                Placeholder(Specifier::Default),
                Text("x"),
                Placeholder(Specifier::Default),
                Placeholder(Specifier::Integer),
            ]
        );
    }

    #[test]
    fn test_blocks_are_flat() {
        use Segment::*;
        assert_eq!(
            parse("a {b {c} d} e"),
            vec![Text("a "), Open, Text("b {c"), Close, Text(" d} e")]
        );
    }

    #[test]
    fn test_block_may_span_lines() {
        use Segment::*;
        assert_eq!(
            parse("{a\n} {b}"),
            vec![Open, Text("a\n"), Close, Text(" "), Open, Text("b"), Close]
        );
    }

    #[test]
    fn test_unclosed_block_is_text() {
        use Segment::*;
        assert_eq!(
            parse("a {b ?d"),
            vec![
                Text("a "),
                Text("{"),
                Text("b "),
                Placeholder(Specifier::Integer)
            ]
        );
    }

    #[test]
    fn test_multibyte_text_and_custom_syntax() {
        use Segment::*;
        let syntax = Syntax::new(':', '[', ']').unwrap();
        let statement = Statement::parse("é [ü = :d] ?", &syntax);
        assert_eq!(
            statement.segments(),
            &[
                Text("é "),
                Open,
                Text("ü = "),
                Placeholder(Specifier::Integer),
                Close,
                Text(" ?"),
            ]
        );
        assert_eq!(statement.placeholder_count(), 1);
    }
}
