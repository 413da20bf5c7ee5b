//! Date helpers for zone serials and listings.

use chrono::{DateTime, NaiveDate, Utc};

/// SOA serial for a zone created on `date`: `YYYYMMDD01`.
pub fn zone_serial(date: NaiveDate) -> String {
    date.format("%Y%m%d01").to_string()
}

/// Serial for a zone created now (UTC).
pub fn today_serial() -> String {
    zone_serial(Utc::now().date_naive())
}

/// `updateDate` column text; empty when the API did not report one.
pub fn format_update_date(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(DateTime::to_rfc3339).unwrap_or_default()
}
