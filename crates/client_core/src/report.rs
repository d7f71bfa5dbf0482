use std::sync::LazyLock;

use regex::Regex;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("paragraph break pattern is valid"));

/// Splits a report on blank-line paragraph breaks.
///
/// Fragment `i` explains the product shown at position `i`. Empty fragments are
/// kept so positions do not shift.
pub fn split_report(report: &str) -> Vec<String> {
    if report.trim().is_empty() {
        return Vec::new();
    }
    PARAGRAPH_BREAK
        .split(report)
        .map(|fragment| fragment.trim().to_string())
        .collect()
}

/// The explanation paired with the product at `index`, if the report has one.
pub fn fragment_for(fragments: &[String], index: usize) -> Option<&str> {
    fragments
        .get(index)
        .map(String::as_str)
        .filter(|fragment| !fragment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_two_or_more_newlines() {
        assert_eq!(
            split_report("para1\n\npara2\n\n\n\npara3"),
            vec!["para1", "para2", "para3"]
        );
    }

    #[test]
    fn single_newlines_stay_inside_a_fragment() {
        assert_eq!(split_report("line a\nline b\n\nnext"), vec!["line a\nline b", "next"]);
    }

    #[test]
    fn handles_crlf_paragraph_breaks() {
        assert_eq!(split_report("one\r\n\r\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn empty_report_has_no_fragments() {
        assert!(split_report("").is_empty());
        assert!(split_report("  \n ").is_empty());
    }

    #[test]
    fn missing_or_blank_fragment_pairs_with_nothing() {
        let fragments = split_report("\n\nsecond");
        assert_eq!(fragment_for(&fragments, 0), None);
        assert_eq!(fragment_for(&fragments, 1), Some("second"));
        assert_eq!(fragment_for(&fragments, 2), None);
    }
}
