use rayon::prelude::*;
use tracing::{debug, info};

use super::partition::partition;
use super::scanner;
use crate::config::SearchConfig;
use crate::errors::MtfindResult;
use crate::metrics::SearchMetrics;
use crate::pattern::Pattern;
use crate::results::{PartialResult, SearchResult};

/// Performs a concurrent search over `buffer`.
///
/// The buffer is split into line-aligned partitions, each partition is
/// scanned on its own rayon task against a shared read-only matcher, and
/// the partial results are folded strictly in partition-index order. The
/// fold carries a running line offset, so the output is deterministic and
/// identical for every partition count, including 1.
pub fn search<'buf>(
    buffer: &'buf [u8],
    config: &SearchConfig,
) -> MtfindResult<SearchResult<'buf>> {
    info!("Starting search for pattern: {}", config.pattern);

    let pattern = Pattern::new(config.pattern.as_bytes().to_vec())?;
    let metrics = SearchMetrics::new();
    let matcher = config.matcher.build(&pattern, &metrics);

    let partitions = partition(buffer, config.partition_count.get());
    if partitions.is_empty() {
        debug!("Empty input, returning empty result");
        return Ok(SearchResult::new());
    }
    debug!(
        "Scanning {} bytes across {} partitions",
        buffer.len(),
        partitions.len()
    );

    // Each task reads only its own partition and writes only its own
    // partial result; collect preserves partition order, not completion
    // order, so the merge below never sees results out of sequence.
    let partials: Vec<PartialResult> = partitions
        .par_iter()
        .map(|p| {
            metrics.record_partition_scan(p.len() as u64);
            scanner::scan(buffer, p, matcher.as_ref())
        })
        .collect();

    let mut result = SearchResult::new();
    let mut line_offset = 0;
    for partial in partials {
        let lines_spanned = partial.line_count;
        result.add_partial(partial, line_offset);
        line_offset += lines_spanned;
    }

    metrics.log_stats();
    info!(
        "Search complete. Found {} matches across {} lines",
        result.total_matches, result.lines_scanned
    );

    Ok(result)
}
