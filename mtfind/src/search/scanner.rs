use super::matcher::Matcher;
use super::partition::Partition;
use crate::results::{Match, PartialResult};

/// Scans one partition for every occurrence of the pattern.
///
/// Line numbers in the returned matches are relative to the partition's own
/// first line; the merge step rewrites them using the accumulated
/// `line_count` of the partitions before this one. Columns are byte offsets
/// from the start of the containing line. Enumeration within a line resumes
/// immediately after the end of the previous match, so overlapping
/// occurrences are not reported.
pub fn scan<'buf>(
    buffer: &'buf [u8],
    partition: &Partition,
    matcher: &dyn Matcher,
) -> PartialResult<'buf> {
    let slice = partition.as_slice(buffer);
    let pattern_len = matcher.pattern_len();

    let mut matches = Vec::new();
    let mut local_line = 0;
    let mut line_count = 0;
    let mut line_start = 0;

    while line_start <= slice.len() {
        let (line_end, has_terminator) = match memchr::memchr(b'\n', &slice[line_start..]) {
            Some(offset) => (line_start + offset, true),
            None => (slice.len(), false),
        };
        let line = &slice[line_start..line_end];

        let mut cursor = 0;
        while let Some(found) = matcher.find(&line[cursor..]) {
            let column = cursor + found;
            matches.push(Match {
                line: local_line,
                column,
                text: &line[column..column + pattern_len],
            });
            cursor = column + pattern_len;
        }

        if !has_terminator {
            break;
        }
        line_count += 1;
        local_line += 1;
        line_start = line_end + 1;
        // A partition ending right after a terminator has no trailing line
        if line_start == slice.len() {
            break;
        }
    }

    PartialResult {
        matches,
        line_count,
    }
}
