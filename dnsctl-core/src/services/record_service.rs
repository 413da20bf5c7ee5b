//! Resource record 管理服务

use std::sync::Arc;

use dnsctl_provider::{CreateRecordRequest, DnsRecord, RecordFilter};

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, ZoneService};
use crate::types::{Alignment, Table};

/// TTL used by `add_record` when none is given.
pub const DEFAULT_RECORD_TTL: u32 = 7200;

/// Resource record 管理服务
pub struct RecordService {
    ctx: Arc<ServiceContext>,
    zones: ZoneService,
}

impl RecordService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let zones = ZoneService::new(Arc::clone(&ctx));
        Self { ctx, zones }
    }

    /// Records of a zone: `id, record, type, ttl, value`.
    pub async fn list_records(&self, zone: &str, filter: &RecordFilter) -> CoreResult<Table> {
        let zone_id = self.zones.resolve_zone_id(zone).await?;
        let records = self.fetch(&zone_id, filter).await?;

        let mut table = Table::new(&["id", "record", "type", "ttl", "value"])
            .with_align("record", Alignment::Right)
            .with_align("ttl", Alignment::Left)
            .with_align("value", Alignment::Left);
        for record in records {
            table.add_row(vec![
                record.id,
                record.host,
                record.record_type.to_uppercase(),
                record.ttl.to_string(),
                record.data,
            ]);
        }
        Ok(table)
    }

    /// Create one record; `ttl` defaults to [`DEFAULT_RECORD_TTL`].
    pub async fn add_record(
        &self,
        zone: &str,
        host: &str,
        record_type: &str,
        data: &str,
        ttl: Option<u32>,
    ) -> CoreResult<DnsRecord> {
        if host.trim().is_empty() {
            return Err(CoreError::ValidationError("record host must not be empty".to_string()));
        }
        if data.trim().is_empty() {
            return Err(CoreError::ValidationError("record data must not be empty".to_string()));
        }
        if !record_type.starts_with(|c: char| c.is_ascii_alphabetic())
            || !record_type.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(CoreError::ValidationError(format!(
                "invalid record type '{record_type}'"
            )));
        }

        let zone_id = self.zones.resolve_zone_id(zone).await?;
        let request = CreateRecordRequest {
            domain_id: zone_id,
            host: host.to_string(),
            record_type: record_type.to_uppercase(),
            data: data.to_string(),
            ttl: Some(ttl.unwrap_or(DEFAULT_RECORD_TTL)),
        };

        self.ctx
            .provider()
            .create_record(&request)
            .await
            .map_err(|e| self.ctx.handle_provider_error("create_record", e))
    }

    /// Update every record named `host` (or only the one with `id`).
    ///
    /// `data` and `ttl` replace the current values when given. Returns the records that
    /// the API reported as edited.
    pub async fn edit_records(
        &self,
        zone: &str,
        host: &str,
        data: Option<&str>,
        ttl: Option<u32>,
        id: Option<&str>,
    ) -> CoreResult<Vec<DnsRecord>> {
        let zone_id = self.zones.resolve_zone_id(zone).await?;
        let records = self.fetch(&zone_id, &RecordFilter::by_host(host)).await?;

        let mut edited = Vec::new();
        for mut record in records {
            if id.is_some_and(|id| id != record.id) {
                continue;
            }
            if let Some(data) = data {
                record.data = data.to_string();
            }
            if let Some(ttl) = ttl {
                record.ttl = ttl;
            }

            let accepted = self
                .ctx
                .provider()
                .edit_record(&record)
                .await
                .map_err(|e| self.ctx.handle_provider_error("edit_record", e))?;
            if accepted {
                edited.push(record);
            } else {
                log::warn!("Record {} was not changed", record.id);
            }
        }
        Ok(edited)
    }

    /// Ids that `remove_records` would delete.
    ///
    /// With `id` only that record is targeted and no lookup is made.
    pub async fn removal_targets(
        &self,
        zone: &str,
        host: &str,
        id: Option<&str>,
    ) -> CoreResult<Vec<String>> {
        let zone_id = self.zones.resolve_zone_id(zone).await?;
        if let Some(id) = id {
            return Ok(vec![id.to_string()]);
        }
        let records = self.fetch(&zone_id, &RecordFilter::by_host(host)).await?;
        Ok(records.into_iter().map(|r| r.id).collect())
    }

    /// Delete the given records, stopping at the first failure.
    pub async fn delete_records(&self, ids: &[String]) -> CoreResult<Vec<String>> {
        let mut deleted = Vec::with_capacity(ids.len());
        for id in ids {
            self.ctx
                .provider()
                .delete_record(id)
                .await
                .map_err(|e| self.ctx.handle_provider_error("delete_record", e))?;
            deleted.push(id.clone());
        }
        Ok(deleted)
    }

    /// Delete every record named `host` (or only the one with `id`). Returns deleted ids.
    pub async fn remove_records(
        &self,
        zone: &str,
        host: &str,
        id: Option<&str>,
    ) -> CoreResult<Vec<String>> {
        let ids = self.removal_targets(zone, host, id).await?;
        self.delete_records(&ids).await
    }

    async fn fetch(&self, zone_id: &str, filter: &RecordFilter) -> CoreResult<Vec<DnsRecord>> {
        self.ctx
            .provider()
            .list_records(zone_id, filter)
            .await
            .map_err(|e| self.ctx.handle_provider_error("list_records", e))
    }
}
