use super::Span;
use crate::db::SKIP;

/// Resolves conditional blocks: a block holding an omitted slot disappears with its
/// delimiters, any other block is replaced by its content.
pub fn resolve_blocks(spans: &[Span<'_>]) -> String {
    let mut query = String::new();
    let mut block = String::new();
    let mut in_block = false;
    let mut omitted = false;

    for span in spans {
        let text = match span {
            Span::Open => {
                in_block = true;
                omitted = false;
                block.clear();
                continue;
            }
            Span::Close => {
                if !omitted {
                    query.push_str(&block);
                }
                in_block = false;
                continue;
            }
            Span::Omitted if in_block => {
                omitted = true;
                continue;
            }
            Span::Omitted => SKIP,
            Span::Literal(text) => *text,
            Span::Rendered { text, omits } => {
                if *omits && in_block {
                    omitted = true;
                }
                text.as_str()
            }
        };
        if in_block {
            block.push_str(text);
        } else {
            query.push_str(text);
        }
    }

    if in_block && !omitted {
        query.push_str(&block);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kept_block_loses_delimiters() {
        let spans = [
            Span::Literal("SELECT * "),
            Span::Open,
            Span::Literal("WHERE id = "),
            Span::Rendered {
                text: "5".into(),
                omits: false,
            },
            Span::Close,
        ];
        assert_eq!(resolve_blocks(&spans), "SELECT * WHERE id = 5");
    }

    #[test]
    fn test_omitted_block_is_dropped() {
        let spans = [
            Span::Literal("SELECT * "),
            Span::Open,
            Span::Literal("WHERE id = "),
            Span::Omitted,
            Span::Close,
            Span::Open,
            Span::Literal(" LIMIT "),
            Span::Rendered {
                text: "10".into(),
                omits: false,
            },
            Span::Close,
        ];
        assert_eq!(resolve_blocks(&spans), "SELECT *  LIMIT 10");
    }

    #[test]
    fn test_omitted_slot_outside_block_keeps_sentinel_text() {
        let spans = [Span::Literal("a = "), Span::Omitted];
        assert_eq!(resolve_blocks(&spans), "a = __SKIP__");
    }

    #[test]
    fn test_rendered_sentinel_text_does_not_drop_block() {
        let spans = [
            Span::Open,
            Span::Rendered {
                text: "'x__SKIP__'".into(),
                omits: false,
            },
            Span::Close,
        ];
        assert_eq!(resolve_blocks(&spans), "'x__SKIP__'");
    }

    #[test]
    fn test_rendered_span_with_omits_drops_block_only() {
        let rendered = || Span::Rendered {
            text: "1, '__SKIP__'".into(),
            omits: true,
        };
        let spans = [Span::Literal("x"), Span::Open, rendered(), Span::Close];
        assert_eq!(resolve_blocks(&spans), "x");
        let spans = [Span::Literal("id IN ("), rendered(), Span::Literal(")")];
        assert_eq!(resolve_blocks(&spans), "id IN (1, '__SKIP__')");
    }
}
