use std::borrow::Cow;

/// A single occurrence of the pattern within the buffer.
///
/// `line` and `column` are 0-based; use the `display_*` accessors for the
/// 1-based presentation form. `text` is a view into the searched buffer and
/// is valid for as long as the buffer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'buf> {
    /// Line index within the buffer (partition-local until merged)
    pub line: usize,
    /// Byte offset of the match within its line
    pub column: usize,
    /// The matched bytes, exactly pattern-length long
    pub text: &'buf [u8],
}

impl<'buf> Match<'buf> {
    /// 1-based line number for presentation
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// 1-based column number for presentation
    pub fn display_column(&self) -> usize {
        self.column + 1
    }

    /// The matched bytes as text, with invalid UTF-8 replaced
    pub fn text_lossy(&self) -> Cow<'buf, str> {
        String::from_utf8_lossy(self.text)
    }
}

/// The output of scanning one partition: matches with partition-local line
/// numbers, plus the number of line terminators the partition spanned.
#[derive(Debug, Clone, Default)]
pub struct PartialResult<'buf> {
    pub matches: Vec<Match<'buf>>,
    pub line_count: usize,
}

/// The complete, globally-numbered search results
#[derive(Debug, Clone, Default)]
pub struct SearchResult<'buf> {
    /// All matches in buffer order, with global line numbers
    pub matches: Vec<Match<'buf>>,
    /// Total number of matches found
    pub total_matches: usize,
    /// Number of line terminators consumed across all partitions
    pub lines_scanned: usize,
    /// Number of partitions that were scanned
    pub partitions_scanned: usize,
}

impl<'buf> SearchResult<'buf> {
    /// Creates a new empty search result
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends one partition's results, rewriting its local line numbers by
    /// `line_offset`. Partials must be added in partition-index order.
    pub fn add_partial(&mut self, partial: PartialResult<'buf>, line_offset: usize) {
        self.total_matches += partial.matches.len();
        self.lines_scanned += partial.line_count;
        self.partitions_scanned += 1;
        self.matches.extend(partial.matches.into_iter().map(|m| Match {
            line: m.line + line_offset,
            ..m
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_display_accessors() {
        let m = Match {
            line: 41,
            column: 4,
            text: b"hello",
        };

        assert_eq!(m.display_line(), 42);
        assert_eq!(m.display_column(), 5);
        assert_eq!(m.text_lossy(), "hello");
    }

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new();
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.lines_scanned, 0);
        assert_eq!(result.partitions_scanned, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_add_partial_rewrites_line_numbers() {
        let mut result = SearchResult::new();

        result.add_partial(
            PartialResult {
                matches: vec![Match {
                    line: 0,
                    column: 0,
                    text: b"foo",
                }],
                line_count: 2,
            },
            0,
        );
        result.add_partial(
            PartialResult {
                matches: vec![Match {
                    line: 0,
                    column: 3,
                    text: b"foo",
                }],
                line_count: 1,
            },
            2,
        );

        assert_eq!(result.total_matches, 2);
        assert_eq!(result.lines_scanned, 3);
        assert_eq!(result.partitions_scanned, 2);
        assert_eq!(result.matches[0].line, 0);
        assert_eq!(result.matches[1].line, 2);
        assert_eq!(result.matches[1].column, 3);
    }

    #[test]
    fn test_add_empty_partial() {
        let mut result = SearchResult::new();
        result.add_partial(PartialResult::default(), 0);

        assert_eq!(result.total_matches, 0);
        assert_eq!(result.partitions_scanned, 1);
    }
}
