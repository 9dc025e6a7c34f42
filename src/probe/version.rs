//! Version token extraction and comparison.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// First double-quoted substring, e.g. `"1.8.0_131"` in
/// `java version "1.8.0_131"`.
static QUOTED_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"\r\n]+)""#).unwrap());

/// Extract the quoted version token from version-command output.
///
/// Tolerates any label before the quote (`java version`, `openjdk version`,
/// `java full version`...).
pub fn extract_version_token(output: &str) -> Option<&str> {
    QUOTED_TOKEN
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// A dotted runtime version compared segment by segment.
///
/// Segments are separated by `.`, `_`, `-` or `+`; each contributes its
/// leading digits. Parsing stops at the first segment without leading
/// digits (`9-ea` is `[9]`, `1.8.0_131-b11` is `[1, 8, 0, 131]`). When
/// one version is a prefix of the other, the longer one is greater.
#[derive(Debug, Clone)]
pub struct RuntimeVersion {
    raw: String,
    segments: Vec<u64>,
}

impl RuntimeVersion {
    /// Parse a version string. Returns `None` if it has no numeric prefix.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let mut segments = Vec::new();

        for part in raw.split(['.', '_', '-', '+']) {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            match digits.parse::<u64>() {
                Ok(n) => segments.push(n),
                Err(_) => break,
            }
        }

        if segments.is_empty() {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The numeric segments.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// The string this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for RuntimeVersion {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for RuntimeVersion {}

impl PartialOrd for RuntimeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuntimeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Vec ordering is segment-wise with the shorter prefix first.
        self.segments.cmp(&other.segments)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> RuntimeVersion {
        RuntimeVersion::parse(s).unwrap()
    }

    #[test]
    fn extracts_token_from_java8_output() {
        let output = "java version \"1.8.0_131\"\nJava(TM) SE Runtime Environment (build 1.8.0_131-b11)\n";
        assert_eq!(extract_version_token(output), Some("1.8.0_131"));
    }

    #[test]
    fn extracts_token_with_different_label() {
        let output = "openjdk version \"11.0.2\" 2019-01-15\nOpenJDK Runtime Environment 18.9\n";
        assert_eq!(extract_version_token(output), Some("11.0.2"));
    }

    #[test]
    fn no_quotes_means_no_token() {
        assert_eq!(extract_version_token("command not found"), None);
        assert_eq!(extract_version_token(""), None);
    }

    #[test]
    fn empty_quotes_are_ignored() {
        assert_eq!(extract_version_token("version \" \""), None);
    }

    #[test]
    fn parses_segments() {
        assert_eq!(v("1.8.0_131").segments(), &[1, 8, 0, 131]);
        assert_eq!(v("1.8.0_131-b11").segments(), &[1, 8, 0, 131]);
        assert_eq!(v("9-ea").segments(), &[9]);
        assert_eq!(v("17.0.1+12").segments(), &[17, 0, 1, 12]);
    }

    #[test]
    fn non_numeric_is_rejected() {
        assert!(RuntimeVersion::parse("ea").is_none());
        assert!(RuntimeVersion::parse("").is_none());
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(v("1.10") > v("1.9"));
        assert!(v("11.0.2") > v("1.8"));
        assert!(v("10") > v("9"));
    }

    #[test]
    fn longer_version_wins_tie() {
        assert!(v("1.8.0_131") > v("1.8"));
        assert!(v("1.8") < v("1.8.0"));
    }

    #[test]
    fn equal_versions() {
        assert_eq!(v("1.8"), v("1.8"));
        assert!(v("1.8") >= v("1.8"));
    }

    #[test]
    fn lower_version() {
        assert!(v("1.7.0_80") < v("1.8"));
    }

    #[test]
    fn display_keeps_raw() {
        assert_eq!(v("1.8.0_131").to_string(), "1.8.0_131");
        assert_eq!(v(" 11 ").as_str(), "11");
    }
}
