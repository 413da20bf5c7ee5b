//! Record normalizer: turns a classified line into something the API accepts.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::classifier::ParsedLine;

#[allow(clippy::expect_used)]
static MX_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<weight>\d+)\s+(?P<target>\S.*)$").expect("MX data pattern is valid")
});

/// A record ready to be created in `zone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub zone: String,
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    pub ttl: Option<u32>,
}

/// What to do with a classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Record(ImportRecord),
    /// Nothing to create (SOA).
    Skip,
}

/// The line was classified but its data is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// MX data without a leading preference.
    MxWithoutWeight { data: String },
}

impl NormalizeError {
    /// Type of the offending record.
    #[must_use]
    pub fn record_type(&self) -> &'static str {
        match self {
            Self::MxWithoutWeight { .. } => "MX",
        }
    }

    /// Data as it appeared in the zone file.
    #[must_use]
    pub fn raw_data(&self) -> &str {
        match self {
            Self::MxWithoutWeight { data } => data,
        }
    }
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MxWithoutWeight { data } => {
                write!(f, "MX data must be '<weight> <target>', got '{data}'")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Decide what a classified line becomes.
///
/// SOA records are skipped. The API has no MX preference field, so the weight is
/// dropped and only the target is kept.
pub fn normalize(parsed: ParsedLine, zone: &str) -> Result<Normalized, NormalizeError> {
    let host = parsed.host().to_string();
    let ParsedLine {
        ttl,
        record_type,
        raw_data,
        ..
    } = parsed;

    let data = match record_type.as_str() {
        "SOA" => return Ok(Normalized::Skip),
        "MX" => {
            let Some(caps) = MX_DATA.captures(&raw_data) else {
                return Err(NormalizeError::MxWithoutWeight { data: raw_data });
            };
            log::debug!("Dropping MX weight {} for {host}", &caps["weight"]);
            caps["target"].to_string()
        }
        _ => raw_data,
    };

    Ok(Normalized::Record(ImportRecord {
        zone: zone.to_string(),
        host,
        record_type,
        data,
        ttl,
    }))
}
