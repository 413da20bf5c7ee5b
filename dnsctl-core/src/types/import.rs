//! Zone file import outcome types

use serde::Serialize;

use super::table::Table;

/// What happened to one line of an imported zone file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportAction {
    /// Zone row of a dry run; nothing was looked up.
    DryRun,
    /// The zone already existed.
    Found,
    /// The zone or record was created.
    Created,
    /// An SOA record or one of its continuation lines.
    Skipped,
    /// The line could not be classified (comments and blank lines included).
    Unknown,
    /// Normalization or creation failed; the row's host carries the message.
    Exception,
    /// A record recognized during a dry run.
    Parsed,
}

impl ImportAction {
    /// Label shown in the `Action` column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DryRun => "Dry Run",
            Self::Found => "Found",
            Self::Created => "Created",
            Self::Skipped => "Skipped",
            Self::Unknown => "Unknown",
            Self::Exception => "Exception",
            Self::Parsed => "Parsed",
        }
    }
}

impl std::fmt::Display for ImportAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the import report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRow {
    pub action: ImportAction,
    pub host: String,
    pub ttl: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
}

impl OutcomeRow {
    /// Row whose only content is the raw line (`Unknown`, `Skipped`).
    #[must_use]
    pub fn raw(action: ImportAction, line: &str) -> Self {
        Self {
            action,
            host: line.to_string(),
            ttl: String::new(),
            record_type: String::new(),
            data: String::new(),
        }
    }

    /// The zone row heading every report.
    #[must_use]
    pub fn zone(action: ImportAction, zone: &str) -> Self {
        Self {
            action,
            host: zone.to_string(),
            ttl: String::new(),
            record_type: "Zone".to_string(),
            data: String::new(),
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.action.to_string(),
            self.host.clone(),
            self.ttl.clone(),
            self.record_type.clone(),
            self.data.clone(),
        ]
    }
}

/// Ordered outcome of one import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Zone name taken from `$ORIGIN`.
    pub zone: String,
    /// Resolved zone id (`"0"` for a dry run).
    pub zone_id: String,
    pub dry_run: bool,
    /// Zone row first, then one row per remaining input line.
    pub rows: Vec<OutcomeRow>,
}

impl ImportReport {
    #[must_use]
    pub fn new(zone: impl Into<String>, zone_id: impl Into<String>, dry_run: bool) -> Self {
        Self {
            zone: zone.into(),
            zone_id: zone_id.into(),
            dry_run,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: OutcomeRow) {
        self.rows.push(row);
    }

    /// Number of rows with the given action, zone row included.
    #[must_use]
    pub fn count(&self, action: ImportAction) -> usize {
        self.rows.iter().filter(|r| r.action == action).count()
    }

    /// Non-zero per-action counts over the record rows, in action order.
    #[must_use]
    pub fn summary(&self) -> Vec<(ImportAction, usize)> {
        let mut counts = std::collections::BTreeMap::new();
        for row in self.rows.iter().skip(1) {
            *counts.entry(row.action).or_insert(0usize) += 1;
        }
        counts.into_iter().collect()
    }

    /// Whether any record failed to normalize or to be created.
    ///
    /// `Unknown` rows (comments, blank lines, directives) are not failures.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.rows.iter().any(|r| r.action == ImportAction::Exception)
    }

    /// Table view with columns `Action, Host, TTL, Type, Record`.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(&["Action", "Host", "TTL", "Type", "Record"]);
        for row in &self.rows {
            table.add_row(row.cells());
        }
        table
    }
}
