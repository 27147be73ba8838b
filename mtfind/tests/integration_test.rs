use mtfind::{read_input, search, MatcherKind, SearchConfig, SearchError};
use std::fs;
use std::num::NonZeroUsize;
use tempfile::tempdir;

fn config(pattern: &str, partitions: usize, matcher: MatcherKind) -> SearchConfig {
    SearchConfig {
        pattern: pattern.to_string(),
        partition_count: NonZeroUsize::new(partitions).unwrap(),
        matcher,
        ..Default::default()
    }
}

#[test]
fn test_concrete_scenario() {
    let buffer = b"foo\nbar\nfoobar\n";
    let result = search(buffer, &config("foo", 2, MatcherKind::BoyerMoore)).unwrap();

    assert_eq!(result.total_matches, 2);
    let triples: Vec<_> = result
        .matches
        .iter()
        .map(|m| (m.line, m.column, m.text))
        .collect();
    assert_eq!(triples, vec![(0, 0, &b"foo"[..]), (2, 0, &b"foo"[..])]);
}

#[test]
fn test_partition_count_does_not_change_results() {
    let buffer = b"the quick brown fox\njumps over the lazy dog\n\
                   the end\nthe the the\nnothing here\nthe last line the\n";

    let baseline = search(buffer, &config("the", 1, MatcherKind::BoyerMoore)).unwrap();
    assert!(baseline.total_matches > 0);

    for partitions in 2..=12 {
        let result = search(buffer, &config("the", partitions, MatcherKind::BoyerMoore)).unwrap();
        assert_eq!(
            result.matches, baseline.matches,
            "results changed with {} partitions",
            partitions
        );
    }
}

#[test]
fn test_matcher_strategies_are_byte_identical() {
    let buffer = b"some b?d bytes\nbad bed bid bod bud\nnothing\nbaaad\n";

    for pattern in ["b?d", "bad", "?", "aa"] {
        for partitions in [1, 2, 4] {
            let brute = search(buffer, &config(pattern, partitions, MatcherKind::BruteForce)).unwrap();
            let boyer = search(buffer, &config(pattern, partitions, MatcherKind::BoyerMoore)).unwrap();
            assert_eq!(
                brute.matches, boyer.matches,
                "strategies disagree for pattern {:?} with {} partitions",
                pattern, partitions
            );
        }
    }
}

#[test]
fn test_search_is_idempotent() {
    let buffer = b"alpha\nbeta\ngamma alpha\n";
    let config = config("alpha", 3, MatcherKind::BoyerMoore);

    let first = search(buffer, &config).unwrap();
    let second = search(buffer, &config).unwrap();
    assert_eq!(first.matches, second.matches);
    assert_eq!(first.total_matches, second.total_matches);
}

#[test]
fn test_wildcard_matching() {
    let buffer = b"abc\naxc\nab\nbbc\n";
    let result = search(buffer, &config("a?c", 1, MatcherKind::BoyerMoore)).unwrap();

    let lines: Vec<_> = result.matches.iter().map(|m| m.line).collect();
    assert_eq!(lines, vec![0, 1]);
    assert_eq!(result.matches[0].text, b"abc");
    assert_eq!(result.matches[1].text, b"axc");
}

#[test]
fn test_no_match_across_line_terminator() {
    let buffer = b"ab\ncd";
    let result = search(buffer, &config("bc", 1, MatcherKind::BoyerMoore)).unwrap();
    assert_eq!(result.total_matches, 0);
}

#[test]
fn test_non_overlapping_matches() {
    let buffer = b"aaaa";
    let result = search(buffer, &config("aa", 1, MatcherKind::BoyerMoore)).unwrap();

    let columns: Vec<_> = result.matches.iter().map(|m| m.column).collect();
    assert_eq!(columns, vec![0, 2]);
}

#[test]
fn test_merge_rewrites_to_buffer_line_numbers() {
    // Three lines, two partitions: the match sits on the last line, which
    // lands in the second partition and is locally line 0 there.
    let buffer = b"aaaa\nbbbb\ncc match\n";
    let result = search(buffer, &config("match", 2, MatcherKind::BoyerMoore)).unwrap();

    assert_eq!(result.total_matches, 1);
    assert_eq!(result.matches[0].line, 2);
    assert_eq!(result.matches[0].column, 3);
}

#[test]
fn test_pattern_longer_than_any_line() {
    let buffer = b"ab\ncd\nef\n";
    let result = search(buffer, &config("abcdef", 2, MatcherKind::BoyerMoore)).unwrap();
    assert_eq!(result.total_matches, 0);
}

#[test]
fn test_trailing_line_without_terminator() {
    let buffer = b"first\nlast foo";
    let result = search(buffer, &config("foo", 2, MatcherKind::BoyerMoore)).unwrap();

    assert_eq!(result.total_matches, 1);
    assert_eq!(result.matches[0].line, 1);
    assert_eq!(result.matches[0].column, 5);
}

#[test]
fn test_display_accessors_are_one_based() {
    let buffer = b"foo\nbar\nfoobar\n";
    let result = search(buffer, &config("foo", 2, MatcherKind::BoyerMoore)).unwrap();

    let displayed: Vec<_> = result
        .matches
        .iter()
        .map(|m| (m.display_line(), m.display_column(), m.text_lossy()))
        .collect();
    assert_eq!(displayed[0], (1, 1, "foo".into()));
    assert_eq!(displayed[1], (3, 1, "foo".into()));
}

#[test]
fn test_end_to_end_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "I've paid my dues\nTime after time\n").unwrap();

    let buffer = read_input(&path).unwrap();
    let result = search(&buffer, &config("?ime", 2, MatcherKind::BoyerMoore)).unwrap();

    assert_eq!(result.total_matches, 2);
    let triples: Vec<_> = result
        .matches
        .iter()
        .map(|m| (m.display_line(), m.display_column(), m.text_lossy().into_owned()))
        .collect();
    assert_eq!(
        triples,
        vec![(2, 1, "Time".to_string()), (2, 12, "time".to_string())]
    );
}

#[test]
fn test_missing_input_is_an_error_not_empty_result() {
    let dir = tempdir().unwrap();
    let err = read_input(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, SearchError::FileNotFound(_)));
}
