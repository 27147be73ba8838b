use tracing::trace;

/// A contiguous, line-aligned byte range of the buffer.
///
/// Every partition except the last ends immediately after a line terminator,
/// so no line is ever split across two partitions. The `index` establishes
/// the merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The partition's view into the buffer it was produced from
    pub fn as_slice<'buf>(&self, buffer: &'buf [u8]) -> &'buf [u8] {
        &buffer[self.start..self.end]
    }
}

/// Counts the lines in `buffer`; a trailing partial line still counts.
pub fn line_count(buffer: &[u8]) -> usize {
    let terminators = memchr::memchr_iter(b'\n', buffer).count();
    match buffer.last() {
        None => 0,
        Some(b'\n') => terminators,
        Some(_) => terminators + 1,
    }
}

/// Splits `buffer` into at most `requested` line-aligned partitions.
///
/// The effective count is clamped to the number of lines, so a partition is
/// never left without a whole line to own; an empty buffer yields no
/// partitions. Each of the first `parts - 1` partitions is grown forward
/// from its target boundary until it ends on a line terminator; the final
/// partition absorbs everything that remains, including the remainder of
/// the integer division.
pub fn partition(buffer: &[u8], requested: usize) -> Vec<Partition> {
    let lines = line_count(buffer);
    if lines == 0 || requested == 0 {
        return Vec::new();
    }

    let parts = requested.min(lines);
    let target = buffer.len() / parts;
    let mut partitions = Vec::with_capacity(parts);
    let mut start = 0;

    for index in 0..parts - 1 {
        let cut = start + target;
        let end = if cut >= buffer.len() {
            buffer.len()
        } else {
            // Grow forward so the last byte of the partition is a terminator.
            match memchr::memchr(b'\n', &buffer[cut - 1..]) {
                Some(offset) => cut + offset,
                None => buffer.len(),
            }
        };
        partitions.push(Partition { index, start, end });
        start = end;
    }
    partitions.push(Partition {
        index: parts - 1,
        start,
        end: buffer.len(),
    });

    trace!(
        "Partitioned {} bytes ({} lines) into {} partitions",
        buffer.len(),
        lines,
        partitions.len()
    );
    partitions
}
