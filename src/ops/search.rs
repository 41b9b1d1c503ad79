use std::ops::Range;

use regex::Regex;

/// Compile a free-text query into a case-insensitive literal matcher.
///
/// Regex metacharacters in the query are escaped, so searching `a.b`
/// matches only the literal text `a.b`, never `axb`. An empty query
/// compiles to `None` (matches everything).
pub fn compile_query(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Collect all non-overlapping match byte-ranges in the given text,
/// for display highlighting.
pub fn match_spans(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn match_is_case_insensitive() {
        let re = compile_query("milk").unwrap();
        assert_eq!(match_spans(&re, "Buy Milk today"), vec![4..8]);
    }

    #[test]
    fn metacharacters_are_literal() {
        let re = compile_query("a.b").unwrap();
        assert!(re.is_match("a.b"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn empty_query_compiles_to_none() {
        assert!(compile_query("").is_none());
    }

    #[test]
    fn multiple_spans_are_collected_in_order() {
        let re = compile_query("a").unwrap();
        assert_eq!(match_spans(&re, "banana"), vec![1..2, 3..4, 5..6]);
    }

    #[test]
    fn spans_are_byte_ranges_in_multibyte_text() {
        let re = compile_query("ú").unwrap();
        // "ú" is two bytes
        assert_eq!(match_spans(&re, "úloha"), vec![0..2]);
    }
}
