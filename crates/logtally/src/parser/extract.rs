//! Extract — pattern-based field extraction from raw log lines.

use regex::Regex;

use super::model::{PatternError, Record};

/// Number of capture groups the configured pattern must declare.
pub const FIELD_COUNT: usize = 3;

/// Applies the configured extraction pattern to raw log lines.
///
/// The pattern is an opaque, externally supplied regex compiled once at
/// startup. Capture-group positions are a contract between the configuration
/// and this extractor: group 1 is the date, group 2 the HTTP method, group 3
/// the user-agent. The match is a search anywhere in the line; the pattern
/// itself decides whether to anchor.
pub struct FieldExtractor {
    pattern: Regex,
}

impl FieldExtractor {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let pattern = Regex::new(pattern)?;
        // captures_len() counts the implicit whole-match group 0.
        let groups = pattern.captures_len() - 1;
        if groups != FIELD_COUNT {
            return Err(PatternError::GroupCount(groups, FIELD_COUNT));
        }
        Ok(Self { pattern })
    }

    /// Extract a [`Record`] from one line.
    ///
    /// `None` is the explicit no-record signal for a line the pattern does
    /// not match; the caller logs it and excludes the line from aggregation.
    pub fn extract(&self, line: &str) -> Option<Record> {
        let caps = self.pattern.captures(line)?;
        // Group count was checked at construction; an unmatched optional
        // group still yields a record with that field empty.
        let field = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");
        Some(Record::new(field(1), field(2), field(3)))
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Combined-log-format pattern: [date:time] "METHOD ..." ... "user-agent"
    const PATTERN: &str = r#"^.*?\[(.*?):.*?"(\S+).*"(.*?)"$"#;

    #[test]
    fn test_extract_well_formed_line() {
        let extractor = FieldExtractor::new(PATTERN).unwrap();
        let line = r#"127.0.0.1 - - [10/Oct/2016:13:55:36 -0700] "GET /index.html HTTP/1.0" 200 2326 "-" "Mozilla/5.0 (Windows NT 10.0; Win64; x64)""#;
        let rec = extractor.extract(line).expect("line should match");
        assert_eq!(rec.date, "10/Oct/2016");
        assert_eq!(rec.method, "GET");
        assert_eq!(rec.agent, "Mozilla/5.0 (Windows NT 10.0; Win64; x64)");
    }

    #[test]
    fn test_extract_no_match_signals_none() {
        let extractor = FieldExtractor::new(PATTERN).unwrap();
        assert!(extractor.extract("not an access log line").is_none());
        assert!(extractor.extract("").is_none());
    }

    #[test]
    fn test_new_rejects_invalid_regex() {
        assert!(matches!(
            FieldExtractor::new(r"(unclosed"),
            Err(PatternError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_new_rejects_wrong_group_count() {
        assert!(matches!(
            FieldExtractor::new(r"\[(.*?)\] (\S+)"),
            Err(PatternError::GroupCount(2, 3))
        ));
    }

    #[test]
    fn test_extract_is_unanchored_search() {
        let extractor = FieldExtractor::new(r"\[(\w+)\] (\w+) (\w+)").unwrap();
        let rec = extractor.extract("prefix [a] b c suffix").unwrap();
        assert_eq!(rec.date, "a");
        assert_eq!(rec.method, "b");
        assert_eq!(rec.agent, "c");
    }
}
