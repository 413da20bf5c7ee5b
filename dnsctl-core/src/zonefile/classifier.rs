//! Line classifier
//!
//! Recognizes the practical subset of BIND record lines:
//!
//! ```text
//! [owner] [ttl] [class] type data...
//! ```
//!
//! `ttl` and `class` may appear in either order. Because lines arrive trimmed, the
//! column-one rule cannot tell an owner from a leading field, so both readings are
//! tried: a reading whose type is a known mnemonic beats one whose type is not, and
//! between equals the reading with an owner wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Type mnemonics preferred when a line reads more than one way.
const KNOWN_TYPES: &[&str] = &[
    "A", "AAAA", "AFSDB", "CAA", "CERT", "CNAME", "DNAME", "DNSKEY", "DS", "HINFO", "LOC",
    "MX", "NAPTR", "NS", "PTR", "RP", "SOA", "SPF", "SRV", "SSHFP", "TLSA", "TXT",
];

/// Record classes.
const CLASSES: &[&str] = &["IN", "CH", "HS", "CS"];

/// Compile one of this module's literal patterns.
#[allow(clippy::expect_used)]
fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("zone file pattern is valid")
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| pattern(r"\S+"));
static OWNER: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(?:@|(?:[\w*-]+\.?)+)$"));
static TYPE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z]\w*$"));

/// One record line split into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLine {
    /// Owner name; `None` means the apex.
    pub domain: Option<String>,
    pub ttl: Option<u32>,
    pub record_class: Option<String>,
    /// Upper-cased type mnemonic.
    pub record_type: String,
    /// Everything after the type, case preserved.
    pub raw_data: String,
}

impl ParsedLine {
    /// Owner as sent to the API: `@` when absent.
    #[must_use]
    pub fn host(&self) -> &str {
        self.domain.as_deref().unwrap_or("@")
    }

    fn has_known_type(&self) -> bool {
        KNOWN_TYPES.contains(&self.record_type.as_str())
    }
}

/// The line has no record shape. Blank lines and whole-line comments included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLine(pub String);

impl std::fmt::Display for UnrecognizedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unrecognized zone file line: {}", self.0)
    }
}

impl std::error::Error for UnrecognizedLine {}

/// Remove a `;` comment that is not inside double quotes, then trim.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => return line[..i].trim(),
            _ => {}
        }
    }
    line.trim()
}

/// Classify one line of a zone file.
pub fn classify(line: &str) -> Result<ParsedLine, UnrecognizedLine> {
    let content = strip_comment(line);
    if content.is_empty() {
        return Err(UnrecognizedLine(line.to_string()));
    }

    let tokens: Vec<(usize, usize, &str)> = TOKEN
        .find_iter(content)
        .map(|m| (m.start(), m.end(), m.as_str()))
        .collect();

    let mut readings = Vec::new();
    if let Some(&(_, _, first)) = tokens.first() {
        if OWNER.is_match(first) && !is_class(first) {
            readings.extend(read_fields(content, &tokens, 1, Some(first)));
        }
    }
    readings.extend(read_fields(content, &tokens, 0, None));

    let best = readings
        .iter()
        .position(ParsedLine::has_known_type)
        .or_else(|| (!readings.is_empty()).then_some(0));

    match best {
        Some(index) => Ok(readings.swap_remove(index)),
        None => Err(UnrecognizedLine(line.to_string())),
    }
}

fn is_class(token: &str) -> bool {
    CLASSES.iter().any(|c| c.eq_ignore_ascii_case(token))
}

fn parse_ttl(token: &str) -> Option<u32> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Every valid reading starting at token `start`, greedy field layouts first.
fn read_fields(
    content: &str,
    tokens: &[(usize, usize, &str)],
    start: usize,
    domain: Option<&str>,
) -> Vec<ParsedLine> {
    #[derive(Clone, Copy)]
    enum Field {
        Ttl,
        Class,
    }
    const LAYOUTS: &[&[Field]] = &[
        &[Field::Ttl, Field::Class],
        &[Field::Class, Field::Ttl],
        &[Field::Ttl],
        &[Field::Class],
        &[],
    ];

    let mut readings = Vec::new();
    'layout: for layout in LAYOUTS {
        let mut ttl = None;
        let mut record_class = None;
        let mut index = start;

        for field in *layout {
            let Some(&(_, _, token)) = tokens.get(index) else {
                continue 'layout;
            };
            match field {
                Field::Ttl => match parse_ttl(token) {
                    Some(value) => ttl = Some(value),
                    None => continue 'layout,
                },
                Field::Class if is_class(token) => record_class = Some(token.to_uppercase()),
                Field::Class => continue 'layout,
            }
            index += 1;
        }

        let Some(&(_, type_end, type_token)) = tokens.get(index) else {
            continue;
        };
        if !TYPE.is_match(type_token) || is_class(type_token) {
            continue;
        }
        let raw_data = content[type_end..].trim();
        if raw_data.is_empty() {
            continue;
        }

        readings.push(ParsedLine {
            domain: domain.map(ToString::to_string),
            ttl,
            record_class,
            record_type: type_token.to_uppercase(),
            raw_data: raw_data.to_string(),
        });
    }
    readings
}
