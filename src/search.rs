/// Naive left-to-right sub-sequence search over `data`.
///
/// Candidate start positions run from `start` through `end` inclusive, with
/// `end` clamped to the last valid index. A match may extend past `end` as
/// long as it fits inside the buffer; a candidate whose window would run off
/// the buffer end cannot match. A zero-length pattern never matches.
///
/// Callers are responsible for rejecting `start > end` before clamping.
pub(crate) fn find_pattern(
    data: &[u8],
    pattern: &[u8],
    start: usize,
    end: usize,
) -> Option<usize> {
    if pattern.is_empty() || start >= data.len() {
        return None;
    }

    let end = end.min(data.len() - 1);
    for i in start..=end {
        // every later candidate leaves even less room
        if pattern.len() > data.len() - i {
            return None;
        }
        if data[i..].starts_with(pattern) {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::find_pattern;

    #[rstest::rstest]
    #[case(b"hello world", b"hello", 0, 11, Some(0))]
    #[case(b"hello world", b"world", 0, 11, Some(6))]
    #[case(b"hello world", b"o", 0, 11, Some(4))]
    #[case(b"hello world", b"o", 5, 11, Some(7))]
    #[case(b"hello world", b"xyz", 0, 11, None)]
    #[case(b"aaab", b"ab", 0, 4, Some(2))]
    #[case(b"abcabc", b"abc", 1, 6, Some(3))]
    fn test_basic_matches(
        #[case] data: &[u8],
        #[case] pattern: &[u8],
        #[case] start: usize,
        #[case] end: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_pattern(data, pattern, start, end), expected);
    }

    #[rstest::rstest]
    // candidate start at the range end, match extending past it
    #[case(b"xyzabc", b"abc", 0, 3, Some(3))]
    // one byte short of the candidate start
    #[case(b"xyzabc", b"abc", 0, 2, None)]
    // range end past the buffer is clamped rather than rejected
    #[case(b"xyzabc", b"abc", 0, 100, Some(3))]
    fn test_range_bounds(
        #[case] data: &[u8],
        #[case] pattern: &[u8],
        #[case] start: usize,
        #[case] end: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_pattern(data, pattern, start, end), expected);
    }

    #[rstest::rstest]
    // pattern would run off the buffer end
    #[case(b"ab", b"bc", 0, 1, None)]
    #[case(b"abc", b"abcd", 0, 2, None)]
    // pattern spanning exactly the last bytes of the buffer
    #[case(b"abc", b"bc", 0, 2, Some(1))]
    #[case(b"abc", b"abc", 0, 2, Some(0))]
    fn test_window_must_fit_buffer(
        #[case] data: &[u8],
        #[case] pattern: &[u8],
        #[case] start: usize,
        #[case] end: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_pattern(data, pattern, start, end), expected);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert_eq!(find_pattern(b"abc", b"", 0, 2), None);
        assert_eq!(find_pattern(b"", b"", 0, 0), None);
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(find_pattern(b"", b"a", 0, 0), None);
    }

    #[test]
    fn test_start_past_buffer() {
        assert_eq!(find_pattern(b"abc", b"a", 3, 10), None);
        assert_eq!(find_pattern(b"abc", b"a", 50, 60), None);
    }

    #[test]
    fn test_partial_match_falls_through_to_next_candidate() {
        // "abx" almost matches at 0, the real match starts at 3
        assert_eq!(find_pattern(b"abxaby", b"aby", 0, 5), Some(3));
    }
}
