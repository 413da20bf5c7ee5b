//! BIND zone file parsing
//!
//! A zone file is read as a whole: the first line must be an `$ORIGIN` directive
//! naming the zone, every following line is classified and normalized on its own.

mod classifier;
mod normalizer;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, CoreResult};

pub use classifier::{ParsedLine, UnrecognizedLine, classify, strip_comment};
pub use normalizer::{ImportRecord, NormalizeError, Normalized, normalize};

#[allow(clippy::expect_used)]
static ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\$ORIGIN\s+(?P<zone>\S*[^\s.])\.(?:\s|;|$)").expect("origin pattern is valid")
});

/// Zone name declared by an `$ORIGIN <name>.` line (trailing dot required).
#[must_use]
pub fn parse_origin(line: &str) -> Option<String> {
    ORIGIN
        .captures(line.trim())
        .map(|caps| caps["zone"].to_string())
}

/// How one line of the zone file is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// A record to create.
    Record(ImportRecord),
    /// SOA record or SOA continuation line.
    Skipped,
    /// No record shape: comments, blank lines and anything unparseable.
    Unknown,
    /// Classified but not importable.
    Invalid(NormalizeError),
}

/// One record line together with its disposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    /// The trimmed line.
    pub line: &'a str,
    pub disposition: Disposition,
}

/// A zone file split into its origin and trimmed record lines.
#[derive(Debug, Clone)]
pub struct ZoneFile {
    zone: String,
    lines: Vec<String>,
}

impl ZoneFile {
    /// Parse zone file text. Fails when the first line is not a valid `$ORIGIN`.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let mut lines = text.lines().map(|l| l.trim().to_string());

        let Some(first) = lines.next() else {
            return Err(CoreError::FormatError("zone file is empty".to_string()));
        };
        let zone = parse_origin(&first).ok_or_else(|| {
            CoreError::FormatError(format!(
                "first line must be '$ORIGIN <zone>.', found '{first}'"
            ))
        })?;

        Ok(Self {
            zone,
            lines: lines.collect(),
        })
    }

    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Lines after the origin, trimmed.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Classify and normalize every line after the origin, in order.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut soa_depth = 0i32;

        self.lines
            .iter()
            .map(|line| {
                let disposition = if soa_depth > 0 {
                    soa_depth += paren_balance(strip_comment(line));
                    Disposition::Skipped
                } else {
                    match classify(line) {
                        Err(_) => Disposition::Unknown,
                        Ok(parsed) => {
                            if parsed.record_type == "SOA" {
                                soa_depth = paren_balance(&parsed.raw_data).max(0);
                            }
                            match normalize(parsed, &self.zone) {
                                Ok(Normalized::Record(record)) => Disposition::Record(record),
                                Ok(Normalized::Skip) => Disposition::Skipped,
                                Err(e) => Disposition::Invalid(e),
                            }
                        }
                    }
                };
                Entry {
                    line: line.as_str(),
                    disposition,
                }
            })
            .collect()
    }
}

/// Opening minus closing parentheses.
fn paren_balance(text: &str) -> i32 {
    text.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}
