use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::metrics::SearchMetrics;
use crate::pattern::{Pattern, WILDCARD};

static MATCHER_CACHE: Lazy<DashMap<(MatcherKind, Vec<u8>), Arc<dyn Matcher>>> =
    Lazy::new(DashMap::new);

/// A pattern-matching strategy.
///
/// The pattern and any precomputation are held by the matcher value, so
/// `find` can be called repeatedly over shrinking sub-ranges to enumerate
/// occurrences. Implementations must agree byte-for-byte on the positions
/// they report; the choice between them is purely a performance one.
pub trait Matcher: Send + Sync {
    /// Returns the byte offset of the next occurrence in `haystack`, or
    /// `None` when the pattern does not occur.
    fn find(&self, haystack: &[u8]) -> Option<usize>;

    /// Length of the pattern this matcher was built for
    fn pattern_len(&self) -> usize;
}

/// Selects which matching strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherKind {
    /// Candidate-by-candidate byte comparison, O(n*m)
    BruteForce,
    /// Bad-character heuristic scan in the style of Boyer-Moore
    #[default]
    BoyerMoore,
}

impl MatcherKind {
    /// Builds (or fetches from the cache) a matcher for `pattern`
    pub fn build(self, pattern: &Pattern, metrics: &SearchMetrics) -> Arc<dyn Matcher> {
        let key = (self, pattern.as_bytes().to_vec());
        if let Some(entry) = MATCHER_CACHE.get(&key) {
            metrics.record_cache_operation(true);
            return entry.clone();
        }

        let matcher: Arc<dyn Matcher> = match self {
            MatcherKind::BruteForce => Arc::new(BruteForceMatcher::new(pattern)),
            MatcherKind::BoyerMoore => Arc::new(BoyerMooreMatcher::new(pattern)),
        };
        metrics.record_cache_operation(false);
        MATCHER_CACHE.insert(key, matcher.clone());
        matcher
    }
}

impl FromStr for MatcherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brute" | "brute-force" => Ok(MatcherKind::BruteForce),
            "bm" | "boyer-moore" => Ok(MatcherKind::BoyerMoore),
            other => Err(format!(
                "unknown matcher '{other}' (expected brute-force or boyer-moore)"
            )),
        }
    }
}

/// Compares every candidate alignment byte-by-byte
#[derive(Debug)]
pub struct BruteForceMatcher {
    pattern: Vec<u8>,
}

impl BruteForceMatcher {
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            pattern: pattern.as_bytes().to_vec(),
        }
    }
}

impl Matcher for BruteForceMatcher {
    fn find(&self, haystack: &[u8]) -> Option<usize> {
        let m = self.pattern.len();
        let n = haystack.len();
        if m > n {
            return None;
        }

        (0..=n - m).find(|&j| {
            self.pattern
                .iter()
                .enumerate()
                .all(|(i, &p)| p == WILDCARD || p == haystack[j + i])
        })
    }

    fn pattern_len(&self) -> usize {
        self.pattern.len()
    }
}

/// Bad-character heuristic matcher.
///
/// Precomputes the last occurrence of each byte value in the pattern and
/// scans right-to-left within each alignment; on a mismatch the alignment
/// shifts so the mismatched text byte lines up with its last occurrence in
/// the pattern. A wildcard position is recorded as an occurrence of every
/// byte value, since it matches all of them; without that, the table could
/// shift past an alignment where a text byte sits under a wildcard.
#[derive(Debug)]
pub struct BoyerMooreMatcher {
    pattern: Vec<u8>,
    last_occurrence: [isize; 256],
}

impl BoyerMooreMatcher {
    pub fn new(pattern: &Pattern) -> Self {
        let mut last_occurrence = [-1isize; 256];
        for (i, &b) in pattern.as_bytes().iter().enumerate() {
            if b == WILDCARD {
                last_occurrence = [i as isize; 256];
            } else {
                last_occurrence[b as usize] = i as isize;
            }
        }
        Self {
            pattern: pattern.as_bytes().to_vec(),
            last_occurrence,
        }
    }
}

impl Matcher for BoyerMooreMatcher {
    fn find(&self, haystack: &[u8]) -> Option<usize> {
        let m = self.pattern.len();
        let n = haystack.len();
        if m > n {
            return None;
        }

        let mut s = 0usize;
        while s <= n - m {
            let mut j = m as isize - 1;
            while j >= 0 {
                let p = self.pattern[j as usize];
                if p != WILDCARD && p != haystack[s + j as usize] {
                    break;
                }
                j -= 1;
            }

            if j < 0 {
                return Some(s);
            }

            // Mismatches never land on a wildcard, so the plain bad-character
            // shift is always well-defined here.
            let bad = haystack[s + j as usize];
            let shift = j - self.last_occurrence[bad as usize];
            s += shift.max(1) as usize;
        }

        None
    }

    fn pattern_len(&self) -> usize {
        self.pattern.len()
    }
}
