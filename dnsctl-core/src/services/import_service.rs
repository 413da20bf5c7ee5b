//! Zone file import
//!
//! Ensures the zone named by `$ORIGIN` exists, then creates one record per importable
//! line. Per-line failures become report rows; only a malformed origin, an unreadable
//! file or an unresolvable zone abort the run.

use std::path::Path;
use std::sync::Arc;

use dnsctl_provider::CreateRecordRequest;

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, ZoneService};
use crate::types::{ImportAction, ImportReport, OutcomeRow};
use crate::zonefile::{Disposition, ImportRecord, ZoneFile};

/// Zone id used by dry runs.
const DRY_RUN_ZONE_ID: &str = "0";

/// Zone file import 服务
pub struct ImportService {
    ctx: Arc<ServiceContext>,
    zones: ZoneService,
}

impl ImportService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let zones = ZoneService::new(Arc::clone(&ctx));
        Self { ctx, zones }
    }

    /// Read and import a zone file.
    pub async fn import_zone_file(&self, path: &Path, dry_run: bool) -> CoreResult<ImportReport> {
        let text = read_zone_file(path).await?;
        self.import_str(&text, dry_run).await
    }

    /// Read a zone file and report what an import would do, without any remote call.
    pub async fn preview_zone_file(path: &Path) -> CoreResult<ImportReport> {
        let text = read_zone_file(path).await?;
        Self::preview(&text)
    }

    /// Dry run over zone file text. Needs no provider.
    pub fn preview(text: &str) -> CoreResult<ImportReport> {
        let file = ZoneFile::parse(text)?;
        let zone = file.zone();
        log::info!("Parsing {} lines of {zone} (dry run)", file.lines().len());

        let mut report = ImportReport::new(zone, DRY_RUN_ZONE_ID, true);
        report.push(OutcomeRow::zone(ImportAction::DryRun, zone));
        for entry in file.entries() {
            let row = match line_row(entry.disposition, entry.line) {
                Ok(row) => row,
                Err(record) => record_row(ImportAction::Parsed, record),
            };
            report.push(row);
        }

        log_summary(&report);
        Ok(report)
    }

    /// Import zone file text.
    ///
    /// With `dry_run` no remote call is made at all; the report shows what would be
    /// created.
    pub async fn import_str(&self, text: &str, dry_run: bool) -> CoreResult<ImportReport> {
        if dry_run {
            return Self::preview(text);
        }

        let file = ZoneFile::parse(text)?;
        let zone = file.zone();

        let (action, zone_id) = self.ensure_zone(zone).await?;
        log::info!("Importing {} lines into {zone} ({action})", file.lines().len());

        let mut report = ImportReport::new(zone, zone_id.as_str(), false);
        report.push(OutcomeRow::zone(action, zone));

        for entry in file.entries() {
            let row = match line_row(entry.disposition, entry.line) {
                Ok(row) => row,
                Err(record) => self.create_record(&zone_id, record).await,
            };
            report.push(row);
        }

        log_summary(&report);
        Ok(report)
    }

    /// Find the zone, creating it when it does not exist yet.
    async fn ensure_zone(&self, zone: &str) -> CoreResult<(ImportAction, String)> {
        match self.zones.resolve_zone_id(zone).await {
            Ok(id) => return Ok((ImportAction::Found, id)),
            Err(CoreError::ZoneNotFound(_)) => {}
            Err(e) => return Err(resolution_error(zone, &e)),
        }

        log::info!("Zone {zone} not found, creating it");
        self.zones
            .create_zone(zone)
            .await
            .map_err(|e| resolution_error(zone, &e))?;

        match self.zones.resolve_zone_id(zone).await {
            Ok(id) => Ok((ImportAction::Created, id)),
            Err(e) => Err(resolution_error(zone, &e)),
        }
    }

    async fn create_record(&self, zone_id: &str, record: ImportRecord) -> OutcomeRow {
        let request = CreateRecordRequest {
            domain_id: zone_id.to_string(),
            host: record.host.clone(),
            record_type: record.record_type.clone(),
            data: record.data.clone(),
            ttl: record.ttl,
        };

        match self.ctx.provider().create_record(&request).await {
            Ok(created) => {
                log::debug!("Created record {} {} {}", created.id, created.host, created.record_type);
                record_row(ImportAction::Created, record)
            }
            Err(e) => {
                let err = self.ctx.handle_provider_error("create_record", e);
                OutcomeRow {
                    host: err.to_string(),
                    ..record_row(ImportAction::Exception, record)
                }
            }
        }
    }
}

async fn read_zone_file(path: &Path) -> CoreResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// The row for a line that needs no remote call, or the record to create.
fn line_row(disposition: Disposition, line: &str) -> Result<OutcomeRow, ImportRecord> {
    match disposition {
        Disposition::Unknown => {
            log::debug!("Unknown line: {line}");
            Ok(OutcomeRow::raw(ImportAction::Unknown, line))
        }
        Disposition::Skipped => Ok(OutcomeRow::raw(ImportAction::Skipped, line)),
        Disposition::Invalid(e) => {
            log::warn!("{e}");
            Ok(OutcomeRow {
                action: ImportAction::Exception,
                host: e.to_string(),
                ttl: String::new(),
                record_type: e.record_type().to_string(),
                data: e.raw_data().to_string(),
            })
        }
        Disposition::Record(record) => Err(record),
    }
}

fn log_summary(report: &ImportReport) {
    let summary = report
        .summary()
        .iter()
        .map(|(action, count)| format!("{count} {action}"))
        .collect::<Vec<_>>()
        .join(", ");
    if report.has_failures() {
        log::warn!("Import of {} finished with failures: {summary}", report.zone);
    } else {
        log::info!("Import of {} finished: {summary}", report.zone);
    }
}

fn record_row(action: ImportAction, record: ImportRecord) -> OutcomeRow {
    OutcomeRow {
        action,
        host: record.host,
        ttl: record.ttl.map(|t| t.to_string()).unwrap_or_default(),
        record_type: record.record_type,
        data: record.data,
    }
}

fn resolution_error(zone: &str, err: &CoreError) -> CoreError {
    CoreError::ZoneResolution {
        zone: zone.to_string(),
        reason: err.to_string(),
    }
}
